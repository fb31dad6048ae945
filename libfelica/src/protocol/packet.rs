// libfelica/src/protocol/packet.rs

use std::fmt;

use crate::constants::{IDM_LEN, MAX_PACKET_LEN, PACKET_PREFIX_LEN};
use crate::protocol::registry;
use crate::types::Idm;
use crate::utils;
use crate::{Error, Result};

/// FeliCa command packet.
///
/// Wire layout: `length(1) | command_code(1) | [idm(8)] | data(n)` where
/// `length` counts every byte including itself. There is no checksum; the
/// transport is responsible for integrity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPacket {
    length: u8,
    command_code: u8,
    idm: Option<Idm>,
    data: Vec<u8>,
}

impl CommandPacket {
    /// Build a packet addressed to the card identified by `idm`.
    pub fn new(command_code: u8, idm: Idm, data: &[u8]) -> Result<Self> {
        Self::build(command_code, Some(idm), data.to_vec())
    }

    /// Build a packet without an IDm. Only the initial Polling request is
    /// sent this way.
    pub fn without_idm(command_code: u8, data: &[u8]) -> Result<Self> {
        Self::build(command_code, None, data.to_vec())
    }

    /// Build from a command code and an undifferentiated body. A body of 8
    /// bytes or more is taken to start with an IDm; a shorter one is all
    /// payload.
    pub fn from_code_and_body(command_code: u8, body: &[u8]) -> Result<Self> {
        if body.len() >= IDM_LEN {
            let idm = Idm::try_from(&body[..IDM_LEN])?;
            Self::build(command_code, Some(idm), body[IDM_LEN..].to_vec())
        } else {
            Self::build(command_code, None, body.to_vec())
        }
    }

    /// Re-parse an encoded packet. The leading length byte must match the
    /// buffer size.
    pub fn from_bytes(raw: &[u8]) -> Result<Self> {
        if raw.len() < PACKET_PREFIX_LEN {
            return Err(Error::InvalidLength {
                expected: PACKET_PREFIX_LEN,
                actual: raw.len(),
            });
        }
        if raw[0] as usize != raw.len() {
            return Err(Error::InvalidLength {
                expected: raw[0] as usize,
                actual: raw.len(),
            });
        }
        Self::from_code_and_body(raw[1], &raw[PACKET_PREFIX_LEN..])
    }

    fn build(command_code: u8, idm: Option<Idm>, data: Vec<u8>) -> Result<Self> {
        if !registry::is_known(command_code) {
            return Err(Error::UnsupportedCommand { code: command_code });
        }
        let idm_len = if idm.is_some() { IDM_LEN } else { 0 };
        let length = PACKET_PREFIX_LEN + idm_len + data.len();
        if length > MAX_PACKET_LEN {
            return Err(Error::FrameTooLarge { length });
        }
        Ok(Self {
            length: length as u8,
            command_code,
            idm,
            data,
        })
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    pub fn command_code(&self) -> u8 {
        self.command_code
    }

    pub fn idm(&self) -> Option<&Idm> {
        self.idm.as_ref()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Registry name of the command code.
    pub fn name(&self) -> &'static str {
        // Construction guarantees the code is registered.
        registry::name_of(self.command_code).unwrap_or("")
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.length as usize);
        buf.push(self.length);
        buf.push(self.command_code);
        if let Some(idm) = &self.idm {
            buf.extend_from_slice(idm.as_bytes());
        }
        buf.extend_from_slice(&self.data);
        buf
    }
}

impl fmt::Display for CommandPacket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "FeliCa command packet")?;
        writeln!(f, " command: {}", self.name())?;
        writeln!(f, " length: {:02x}", self.length)?;
        writeln!(f, " command code: {:02x}", self.command_code)?;
        if let Some(idm) = &self.idm {
            writeln!(f, " IDm: {}", idm.to_hex())?;
        }
        write!(f, " data: {}", utils::bytes_to_hex(&self.data))
    }
}
