// libfelica/src/protocol/commands/system.rs

use crate::Result;
use crate::constants::COMMAND_REQUEST_SYSTEM_CODE;
use crate::protocol::CommandPacket;
use crate::types::Idm;

/// Encode RequestSystemCode command (FeliCa command code 0x0C)
/// Layout: idm(8)
pub fn encode_request_system_code(idm: Idm) -> Result<CommandPacket> {
    CommandPacket::new(COMMAND_REQUEST_SYSTEM_CODE, idm, &[])
}
