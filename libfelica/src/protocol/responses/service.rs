// libfelica/src/protocol/responses/service.rs

use crate::Result;
use crate::protocol::{CommandResponse, parser};

/// Decode RequestService response (response code = 0x03)
/// Data layout: count(1) + key_versions(N*2, little endian)
pub fn decode_request_service(resp: &CommandResponse) -> Result<Vec<u16>> {
    let data = resp.data();
    let count = parser::byte_at(data, 0)? as usize;
    parser::ensure_len(data, 1 + count * 2)?;
    (0..count)
        .map(|i| parser::le_u16_at(data, 1 + i * 2))
        .collect()
}

/// Decode RequestResponse response (response code = 0x05)
/// Data layout: mode(1)
pub fn decode_request_response(resp: &CommandResponse) -> Result<u8> {
    parser::byte_at(resp.data(), 0)
}
