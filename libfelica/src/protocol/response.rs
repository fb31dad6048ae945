// libfelica/src/protocol/response.rs

use std::fmt;

use crate::constants::RESPONSE_HEADER_LEN;
use crate::protocol::{parser, registry};
use crate::types::Idm;
use crate::utils;
use crate::{Error, Result};

/// FeliCa command response as returned by the transport.
///
/// Layout: `length(1) | response_code(1) | idm(8) | data(m)`. Decoding is
/// unconditional past the 10 byte header: neither the response code nor
/// the length byte is validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResponse {
    raw: Vec<u8>,
    length: u8,
    response_code: u8,
    idm: Idm,
    data: Vec<u8>,
}

impl CommandResponse {
    pub fn decode(raw: &[u8]) -> Result<Self> {
        parser::ensure_len(raw, RESPONSE_HEADER_LEN)?;
        Ok(Self {
            raw: raw.to_vec(),
            length: raw[0],
            response_code: raw[1],
            idm: parser::idm_at(raw, 2)?,
            data: raw[RESPONSE_HEADER_LEN..].to_vec(),
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    pub fn response_code(&self) -> u8 {
        self.response_code
    }

    pub fn idm(&self) -> &Idm {
        &self.idm
    }

    /// Bytes after the IDm.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn name(&self) -> Option<&'static str> {
        registry::name_of(self.response_code)
    }

    /// Whether the length byte agrees with the number of bytes received.
    pub fn length_matches(&self) -> bool {
        self.length as usize == self.raw.len()
    }

    /// Check the response code against the one expected by the caller.
    pub fn expect_code(&self, expected: u8) -> Result<()> {
        if self.response_code != expected {
            return Err(Error::UnexpectedResponse {
                expected,
                actual: self.response_code,
            });
        }
        Ok(())
    }
}

impl fmt::Display for CommandResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "FeliCa response packet")?;
        writeln!(f, " command: {}", registry::describe(self.response_code))?;
        writeln!(f, " length: {:02x}", self.length)?;
        writeln!(f, " response code: {:02x}", self.response_code)?;
        writeln!(f, " IDm: {}", self.idm.to_hex())?;
        write!(f, " data: {}", utils::bytes_to_hex(&self.data))
    }
}
