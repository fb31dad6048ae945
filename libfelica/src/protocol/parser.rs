// libfelica/src/protocol/parser.rs

//! Bounds-checked readers over response bytes. Every short read surfaces
//! as `Error::MalformedResponse` instead of a panic.

use crate::constants::{BLOCK_LEN, IDM_LEN, PMM_LEN};
use crate::types::{Block, Idm, Pmm};
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::MalformedResponse {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a little-endian u16 at given index, with bounds checking.
pub fn le_u16_at(data: &[u8], idx: usize) -> Result<u16> {
    let s = slice_at(data, idx, 2)?;
    Ok(u16::from_le_bytes([s[0], s[1]]))
}

/// Read a big-endian u16 at given index, with bounds checking.
pub fn be_u16_at(data: &[u8], idx: usize) -> Result<u16> {
    let s = slice_at(data, idx, 2)?;
    Ok(u16::from_be_bytes([s[0], s[1]]))
}

pub fn idm_at(data: &[u8], start: usize) -> Result<Idm> {
    Idm::try_from(slice_at(data, start, IDM_LEN)?)
}

pub fn pmm_at(data: &[u8], start: usize) -> Result<Pmm> {
    Pmm::try_from(slice_at(data, start, PMM_LEN)?)
}

pub fn block_at(data: &[u8], start: usize) -> Result<Block> {
    Block::try_from(slice_at(data, start, BLOCK_LEN)?)
}
