// libfelica/src/protocol/responses/mod.rs

pub mod polling;
pub mod read;
pub mod search;
pub mod service;
pub mod system;
pub mod write;

pub use polling::{PollingResponse, decode_polling};
pub use read::{ReadResponse, decode_read};
pub use search::{SearchResult, decode_search_service_code};
pub use service::{decode_request_response, decode_request_service};
pub use system::decode_request_system_code;
pub use write::{WriteResponse, decode_write};

use crate::constants::*;
use crate::protocol::CommandResponse;
use crate::types::{Idm, SystemCode};
use crate::{Error, Result};

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Polling(PollingResponse),
    ReadWithoutEncryption(ReadResponse),
    WriteWithoutEncryption(WriteResponse),
    RequestService {
        idm: Idm,
        versions: Vec<u16>,
    },
    RequestResponse {
        idm: Idm,
        mode: u8,
    },
    RequestSystemCode {
        idm: Idm,
        system_codes: Vec<SystemCode>,
    },
    SearchServiceCode {
        idm: Idm,
        result: Option<SearchResult>,
    },
}

impl Response {
    /// Decode the data part of `resp` for the command that was sent.
    ///
    /// The response code carried by `resp` is not checked here; callers that
    /// care use [`CommandResponse::expect_code`] first.
    pub fn decode(command_code: u8, resp: &CommandResponse) -> Result<Self> {
        let idm = *resp.idm();
        match command_code {
            COMMAND_POLLING => decode_polling(resp).map(Self::Polling),
            COMMAND_READ_WO_ENCRYPTION => decode_read(resp).map(Self::ReadWithoutEncryption),
            COMMAND_WRITE_WO_ENCRYPTION => decode_write(resp).map(Self::WriteWithoutEncryption),
            COMMAND_REQUEST_SERVICE => Ok(Self::RequestService {
                idm,
                versions: decode_request_service(resp)?,
            }),
            COMMAND_REQUEST_RESPONSE => Ok(Self::RequestResponse {
                idm,
                mode: decode_request_response(resp)?,
            }),
            COMMAND_REQUEST_SYSTEM_CODE => Ok(Self::RequestSystemCode {
                idm,
                system_codes: decode_request_system_code(resp)?,
            }),
            COMMAND_SEARCH_SERVICE_CODE => Ok(Self::SearchServiceCode {
                idm,
                result: decode_search_service_code(resp)?,
            }),
            other => Err(Error::UnsupportedCommand { code: other }),
        }
    }

    /// Return the response code byte associated with this response variant.
    pub fn response_code(&self) -> u8 {
        match self {
            Self::Polling(_) => RESPONSE_POLLING,
            Self::ReadWithoutEncryption(_) => RESPONSE_READ_WO_ENCRYPTION,
            Self::WriteWithoutEncryption(_) => RESPONSE_WRITE_WO_ENCRYPTION,
            Self::RequestService { .. } => RESPONSE_REQUEST_SERVICE,
            Self::RequestResponse { .. } => RESPONSE_REQUEST_RESPONSE,
            Self::RequestSystemCode { .. } => RESPONSE_REQUEST_SYSTEM_CODE,
            Self::SearchServiceCode { .. } => RESPONSE_SEARCH_SERVICE_CODE,
        }
    }

    pub fn idm(&self) -> &Idm {
        match self {
            Self::Polling(r) => &r.idm,
            Self::ReadWithoutEncryption(r) => &r.idm,
            Self::WriteWithoutEncryption(r) => &r.idm,
            Self::RequestService { idm, .. }
            | Self::RequestResponse { idm, .. }
            | Self::RequestSystemCode { idm, .. }
            | Self::SearchServiceCode { idm, .. } => idm,
        }
    }
}
