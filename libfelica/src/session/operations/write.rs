use log::warn;

use crate::Result;
use crate::protocol::{Command, ServiceBlockList, decode_write};
use crate::session::{CardOutcome, Session};
use crate::transport::Transport;
use crate::types::{AccessMode, Block, BlockListElement, ServiceCode};

/// Write multiple blocks in a single WriteWithoutEncryption command.
///
/// The block count field follows the session's `block_count_mode`.
pub fn write_blocks<T: Transport>(
    session: &mut Session<T>,
    services: &[ServiceCode],
    blocks: &[(BlockListElement, Block)],
) -> Result<CardOutcome<()>> {
    let idm = session.require_idm()?;

    let elements: Vec<_> = blocks.iter().map(|(e, _)| *e).collect();
    let data: Vec<_> = blocks.iter().map(|(_, d)| *d).collect();
    let cmd = Command::WriteWithoutEncryption {
        idm,
        list: ServiceBlockList::new(services, &elements)?,
        data,
        block_count_mode: session.config().block_count_mode,
    };

    let resp = session.execute(&cmd)?;
    if resp.data().len() < 2 {
        warn!("write reply from card {} has no status flags", idm.to_hex());
        return Ok(CardOutcome::missing_status());
    }
    let status = decode_write(&resp)?.status;
    if !status.is_success() {
        warn!("write refused by card {}: {}", idm.to_hex(), status);
    }
    Ok(CardOutcome::from_status(status, || ()))
}

/// Write a single block with the 2-byte block list element `[0x80, addr]`.
pub fn write_without_encryption<T: Transport>(
    session: &mut Session<T>,
    service: ServiceCode,
    addr: u8,
    block: &Block,
) -> Result<CardOutcome<()>> {
    let element = BlockListElement::short(AccessMode::Decrement, 0, addr);
    write_blocks(session, &[service], &[(element, *block)])
}
