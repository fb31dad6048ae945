// libfelica/src/protocol/commands/service.rs

use crate::constants::{COMMAND_REQUEST_RESPONSE, COMMAND_REQUEST_SERVICE, MAX_NODE_CODES};
use crate::protocol::CommandPacket;
use crate::types::Idm;
use crate::{Error, Result};

/// Encode RequestService command (FeliCa command code 0x02)
/// Layout: idm(8) + node_count(1) + node_code_list(2*N, little endian)
pub fn encode_request_service(idm: Idm, node_codes: &[u16]) -> Result<CommandPacket> {
    if node_codes.is_empty() || node_codes.len() > MAX_NODE_CODES {
        return Err(Error::InvalidNodeCount {
            count: node_codes.len(),
        });
    }
    let mut buf = Vec::with_capacity(1 + node_codes.len() * 2);
    buf.push(node_codes.len() as u8);
    for n in node_codes {
        buf.extend_from_slice(&n.to_le_bytes());
    }
    CommandPacket::new(COMMAND_REQUEST_SERVICE, idm, &buf)
}

/// Encode RequestResponse command (FeliCa command code 0x04)
/// Layout: idm(8)
pub fn encode_request_response(idm: Idm) -> Result<CommandPacket> {
    CommandPacket::new(COMMAND_REQUEST_RESPONSE, idm, &[])
}
