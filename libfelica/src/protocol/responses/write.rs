// libfelica/src/protocol/responses/write.rs

use crate::Result;
use crate::protocol::{CommandResponse, parser};
use crate::types::{Idm, StatusFlags};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteResponse {
    pub idm: Idm,
    pub status: StatusFlags,
}

/// Decode WriteWithoutEncryption response (response code = 0x09)
/// Data layout: status1(1) + status2(1)
pub fn decode_write(resp: &CommandResponse) -> Result<WriteResponse> {
    let data = resp.data();
    let status = StatusFlags::new(parser::byte_at(data, 0)?, parser::byte_at(data, 1)?);
    Ok(WriteResponse {
        idm: *resp.idm(),
        status,
    })
}
