// libfelica/src/protocol/commands/mod.rs

pub mod polling;
pub mod read;
pub mod search;
pub mod service;
pub mod system;
pub mod write;

pub use polling::{encode_discovery, encode_polling};
pub use read::encode_read;
pub use search::encode_search_service_code;
pub use service::{encode_request_response, encode_request_service};
pub use system::encode_request_system_code;
pub use write::{BlockCountMode, encode_write};

use crate::Result;
use crate::constants::*;
use crate::protocol::{CommandPacket, ServiceBlockList};
use crate::types::{Block, Idm, SystemCode};

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone)]
pub enum Command {
    Polling {
        system_code: SystemCode,
        request_code: u8,
        time_slot: u8,
    },
    ReadWithoutEncryption {
        idm: Idm,
        list: ServiceBlockList,
    },
    WriteWithoutEncryption {
        idm: Idm,
        list: ServiceBlockList,
        data: Vec<Block>,
        block_count_mode: BlockCountMode,
    },
    RequestService {
        idm: Idm,
        node_codes: Vec<u16>,
    },
    RequestResponse {
        idm: Idm,
    },
    RequestSystemCode {
        idm: Idm,
    },
    SearchServiceCode {
        idm: Idm,
        index: u16,
    },
}

impl Command {
    /// Return the FeliCa command code.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::Polling { .. } => COMMAND_POLLING,
            Self::ReadWithoutEncryption { .. } => COMMAND_READ_WO_ENCRYPTION,
            Self::WriteWithoutEncryption { .. } => COMMAND_WRITE_WO_ENCRYPTION,
            Self::RequestService { .. } => COMMAND_REQUEST_SERVICE,
            Self::RequestResponse { .. } => COMMAND_REQUEST_RESPONSE,
            Self::RequestSystemCode { .. } => COMMAND_REQUEST_SYSTEM_CODE,
            Self::SearchServiceCode { .. } => COMMAND_SEARCH_SERVICE_CODE,
        }
    }

    /// Response code the card answers with (command code + 1).
    pub fn response_code(&self) -> u8 {
        self.command_code().wrapping_add(1)
    }

    /// Build the command packet.
    pub fn to_packet(&self) -> Result<CommandPacket> {
        match self {
            Self::Polling {
                system_code,
                request_code,
                time_slot,
            } => encode_polling(*system_code, *request_code, *time_slot),
            Self::ReadWithoutEncryption { idm, list } => encode_read(*idm, list),
            Self::WriteWithoutEncryption {
                idm,
                list,
                data,
                block_count_mode,
            } => encode_write(*idm, list, data, *block_count_mode),
            Self::RequestService { idm, node_codes } => encode_request_service(*idm, node_codes),
            Self::RequestResponse { idm } => encode_request_response(*idm),
            Self::RequestSystemCode { idm } => encode_request_system_code(*idm),
            Self::SearchServiceCode { idm, index } => encode_search_service_code(*idm, *index),
        }
    }

    /// Encode straight to wire bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(self.to_packet()?.to_bytes())
    }
}
