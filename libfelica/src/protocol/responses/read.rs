// libfelica/src/protocol/responses/read.rs

use crate::Result;
use crate::constants::BLOCK_LEN;
use crate::protocol::{CommandResponse, parser};
use crate::types::{Block, Idm, StatusFlags};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadResponse {
    pub idm: Idm,
    pub status: StatusFlags,
    /// Empty whenever `status` reports an error.
    pub blocks: Vec<Block>,
}

/// Decode ReadWithoutEncryption response (response code = 0x07)
/// Data layout: status1(1) + status2(1) + [block_count(1) + blocks(N*16)]
///
/// Block data is only present (and only parsed) when status flag 1 is 0.
pub fn decode_read(resp: &CommandResponse) -> Result<ReadResponse> {
    let data = resp.data();
    let status = StatusFlags::new(parser::byte_at(data, 0)?, parser::byte_at(data, 1)?);

    if !status.is_success() {
        return Ok(ReadResponse {
            idm: *resp.idm(),
            status,
            blocks: Vec::new(),
        });
    }

    let block_count = parser::byte_at(data, 2)? as usize;
    parser::ensure_len(data, 3 + block_count * BLOCK_LEN)?;

    let blocks = (0..block_count)
        .map(|i| parser::block_at(data, 3 + i * BLOCK_LEN))
        .collect::<Result<Vec<_>>>()?;

    Ok(ReadResponse {
        idm: *resp.idm(),
        status,
        blocks,
    })
}
