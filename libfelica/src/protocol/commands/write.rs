// libfelica/src/protocol/commands/write.rs

use crate::constants::{BLOCK_LEN, COMMAND_WRITE_WO_ENCRYPTION};
use crate::protocol::{CommandPacket, ServiceBlockList};
use crate::types::{Block, Idm};
use crate::{Error, Result};

/// Value placed in the block count field of Write Without Encryption.
///
/// Legacy callers sent the byte length of the block data in this field,
/// which only equals the block count by accident. For a single 16 byte
/// block the legacy value is 16 where the card expects 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockCountMode {
    /// Number of blocks written.
    #[default]
    Blocks,
    /// Byte length of the block data (legacy wire behaviour).
    PayloadLength,
}

impl BlockCountMode {
    fn block_count(self, blocks: usize) -> Result<u8> {
        let value = match self {
            BlockCountMode::Blocks => blocks,
            BlockCountMode::PayloadLength => blocks * BLOCK_LEN,
        };
        u8::try_from(value).map_err(|_| Error::FrameTooLarge { length: value })
    }
}

/// Encode WriteWithoutEncryption command (FeliCa command code 0x08)
/// Layout: idm(8) + service_count(1) + service_code_list(2*M)
///         + block_count(1) + block_list(2|3 * N) + block_data(16*N)
pub fn encode_write(
    idm: Idm,
    list: &ServiceBlockList,
    data: &[Block],
    mode: BlockCountMode,
) -> Result<CommandPacket> {
    if data.len() != list.blocks().len() {
        return Err(Error::InvalidBlockList(format!(
            "{} block list element(s) but {} data block(s)",
            list.blocks().len(),
            data.len()
        )));
    }

    let mut buf = list.encode_with_block_count(mode.block_count(data.len())?);
    for block in data {
        buf.extend_from_slice(block.as_bytes());
    }
    CommandPacket::new(COMMAND_WRITE_WO_ENCRYPTION, idm, &buf)
}
