// libfelica/src/protocol/block_list.rs

use crate::constants::MAX_SERVICES;
use crate::types::{BlockListElement, ServiceCode};
use crate::{Error, Result};

/// Service code list plus block list, the shared body of the Read and
/// Write Without Encryption commands.
///
/// Encodes as `service_count(1) + service_code(2, LE)*m + block_count(1) +
/// block_list_element(2|3)*n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceBlockList {
    services: Vec<ServiceCode>,
    blocks: Vec<BlockListElement>,
}

impl ServiceBlockList {
    pub fn new(services: &[ServiceCode], blocks: &[BlockListElement]) -> Result<Self> {
        if services.is_empty() || services.len() > MAX_SERVICES {
            return Err(Error::InvalidBlockList(format!(
                "service count must be 1..={}, got {}",
                MAX_SERVICES,
                services.len()
            )));
        }
        if blocks.is_empty() || blocks.len() > u8::MAX as usize {
            return Err(Error::InvalidBlockList(format!(
                "block count must be 1..=255, got {}",
                blocks.len()
            )));
        }
        if let Some(bad) = blocks
            .iter()
            .find(|b| b.service_order() as usize >= services.len())
        {
            return Err(Error::InvalidBlockList(format!(
                "service code list order {} out of range for {} service(s)",
                bad.service_order(),
                services.len()
            )));
        }
        Ok(Self {
            services: services.to_vec(),
            blocks: blocks.to_vec(),
        })
    }

    /// One service, one block.
    pub fn single(service: ServiceCode, block: BlockListElement) -> Result<Self> {
        Self::new(&[service], &[block])
    }

    pub fn services(&self) -> &[ServiceCode] {
        &self.services
    }

    pub fn blocks(&self) -> &[BlockListElement] {
        &self.blocks
    }

    pub fn encode(&self) -> Vec<u8> {
        self.encode_with_block_count(self.blocks.len() as u8)
    }

    /// Encode with an explicit block count byte. Write Without Encryption
    /// uses this to carry the configured block count value.
    pub fn encode_with_block_count(&self, block_count: u8) -> Vec<u8> {
        let mut buf = Vec::with_capacity(2 + self.services.len() * 2 + self.blocks.len() * 3);
        buf.push(self.services.len() as u8);
        for svc in &self.services {
            buf.extend_from_slice(&svc.to_le_bytes());
        }
        buf.push(block_count);
        for blk in &self.blocks {
            buf.extend_from_slice(&blk.encode());
        }
        buf
    }
}
