// libfelica/src/protocol/commands/read.rs

use crate::Result;
use crate::constants::COMMAND_READ_WO_ENCRYPTION;
use crate::protocol::{CommandPacket, ServiceBlockList};
use crate::types::Idm;

/// Encode ReadWithoutEncryption command (FeliCa command code 0x06)
/// Layout: idm(8) + service_count(1) + service_code_list(2*M)
///         + block_count(1) + block_list(2|3 * N)
pub fn encode_read(idm: Idm, list: &ServiceBlockList) -> Result<CommandPacket> {
    CommandPacket::new(COMMAND_READ_WO_ENCRYPTION, idm, &list.encode())
}
