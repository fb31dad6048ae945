// libfelica/src/protocol/commands/search.rs

use crate::Result;
use crate::constants::COMMAND_SEARCH_SERVICE_CODE;
use crate::protocol::CommandPacket;
use crate::types::Idm;

/// Encode SearchServiceCode command (FeliCa command code 0x0A)
/// Layout: idm(8) + index(2, little endian)
pub fn encode_search_service_code(idm: Idm, index: u16) -> Result<CommandPacket> {
    CommandPacket::new(COMMAND_SEARCH_SERVICE_CODE, idm, &index.to_le_bytes())
}
