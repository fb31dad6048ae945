// libfelica/src/protocol/commands/polling.rs

use crate::Result;
use crate::constants::{COMMAND_POLLING, POLLING_REQUEST_SYSTEM_CODE, POLLING_TIME_SLOT};
use crate::protocol::CommandPacket;
use crate::types::SystemCode;

/// Encode Polling command (FeliCa command code 0x00).
/// Layout: system_code(2, big endian) + request_code(1) + time_slot(1).
/// Sent without an IDm since the card is not known yet.
pub fn encode_polling(
    system_code: SystemCode,
    request_code: u8,
    time_slot: u8,
) -> Result<CommandPacket> {
    let [hi, lo] = system_code.to_be_bytes();
    CommandPacket::without_idm(COMMAND_POLLING, &[hi, lo, request_code, time_slot])
}

/// Polling with the system code request flag set and a single time slot.
pub fn encode_discovery(system_code: SystemCode) -> Result<CommandPacket> {
    encode_polling(system_code, POLLING_REQUEST_SYSTEM_CODE, POLLING_TIME_SLOT)
}
