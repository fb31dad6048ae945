use log::warn;

use crate::constants::BLOCK_LEN;
use crate::protocol::{Command, ServiceBlockList, decode_read};
use crate::session::{CardOutcome, Session};
use crate::transport::Transport;
use crate::types::{AccessMode, Block, BlockListElement, ServiceCode};
use crate::{Error, Result};

/// Read the blocks named by `elements` using ReadWithoutEncryption.
///
/// A card refusal comes back as `CardOutcome::CardError`; the block data of
/// a refused read is never returned.
pub fn read_blocks<T: Transport>(
    session: &mut Session<T>,
    services: &[ServiceCode],
    elements: &[BlockListElement],
) -> Result<CardOutcome<Vec<Block>>> {
    let idm = session.require_idm()?;
    let list = ServiceBlockList::new(services, elements)?;

    let resp = session.execute(&Command::ReadWithoutEncryption { idm, list })?;
    if resp.data().len() < 2 {
        warn!("read reply from card {} has no status flags", idm.to_hex());
        return Ok(CardOutcome::missing_status());
    }
    let read = decode_read(&resp)?;

    if !read.status.is_success() {
        warn!("read refused by card {}: {}", idm.to_hex(), read.status);
        return Ok(CardOutcome::CardError(read.status));
    }
    if read.blocks.len() != elements.len() {
        // status(2) + count(1) + blocks
        return Err(Error::MalformedResponse {
            expected: 3 + elements.len() * BLOCK_LEN,
            actual: resp.data().len(),
        });
    }
    Ok(CardOutcome::from_status(read.status, || read.blocks))
}

/// Convenience helper that reads a single block with the 2-byte block
/// list element `[0x80, addr]`.
pub fn read_without_encryption<T: Transport>(
    session: &mut Session<T>,
    service: ServiceCode,
    addr: u8,
) -> Result<CardOutcome<Block>> {
    let element = BlockListElement::short(AccessMode::Decrement, 0, addr);
    let outcome = read_blocks(session, &[service], &[element])?;
    // read_blocks guarantees exactly one block on success
    Ok(outcome.map(|blocks| blocks[0]))
}
