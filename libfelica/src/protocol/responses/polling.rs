// libfelica/src/protocol/responses/polling.rs

use crate::Result;
use crate::constants::PMM_LEN;
use crate::protocol::{CommandResponse, parser};
use crate::types::{Idm, Pmm, SystemCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollingResponse {
    pub idm: Idm,
    pub pmm: Pmm,
    /// Present when the card echoed its system code (request code 0x01).
    pub system_code: Option<SystemCode>,
}

/// Decode a Polling response (response code = 0x01)
/// Data layout: pmm(8) + [system_code(2, big endian)]
pub fn decode_polling(resp: &CommandResponse) -> Result<PollingResponse> {
    let data = resp.data();
    let pmm = parser::pmm_at(data, 0)?;
    let system_code = if data.len() >= PMM_LEN + 2 {
        Some(SystemCode::new(parser::be_u16_at(data, PMM_LEN)?))
    } else {
        None
    };

    Ok(PollingResponse {
        idm: *resp.idm(),
        pmm,
        system_code,
    })
}
