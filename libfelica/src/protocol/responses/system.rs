// libfelica/src/protocol/responses/system.rs

use crate::Result;
use crate::protocol::{CommandResponse, parser};
use crate::types::SystemCode;

/// Decode RequestSystemCode response (response code = 0x0D)
/// Data layout: count(1) + system_codes(N*2, big endian)
pub fn decode_request_system_code(resp: &CommandResponse) -> Result<Vec<SystemCode>> {
    let data = resp.data();
    let count = parser::byte_at(data, 0)? as usize;
    parser::ensure_len(data, 1 + count * 2)?;
    (0..count)
        .map(|i| parser::be_u16_at(data, 1 + i * 2).map(SystemCode::new))
        .collect()
}
