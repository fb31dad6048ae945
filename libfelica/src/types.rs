// libfelica/src/types.rs

use std::convert::TryFrom;
use std::fmt;

use derive_more::Display;

use crate::constants::{BLOCK_LEN, IDM_LEN, PMM_LEN, STATUS_FLAG1_NORMAL};
use crate::utils;
use crate::{Error, Result};

/// IDm - Newtype Pattern (8 バイト)
///
/// Layout: manufacturer code (2) + card identification number (6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Idm([u8; IDM_LEN]);

impl Idm {
    pub fn from_bytes(bytes: [u8; IDM_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; IDM_LEN] {
        &self.0
    }

    pub fn manufacturer_code(&self) -> [u8; 2] {
        [self.0[0], self.0[1]]
    }

    pub fn card_identification(&self) -> [u8; 6] {
        let mut out = [0u8; 6];
        out.copy_from_slice(&self.0[2..]);
        out
    }

    pub fn to_hex(&self) -> String {
        utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Idm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Ok(Self(fixed_array(bytes)?))
    }
}

impl fmt::Display for Idm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.card_identification();
        writeln!(f, "IDm (8byte) : {}", self.to_hex())?;
        writeln!(
            f,
            " manufacturer code: {}",
            utils::bytes_to_hex(&self.manufacturer_code())
        )?;
        writeln!(f, " card identification:")?;
        writeln!(f, "   equipment: {}", utils::bytes_to_hex(&id[0..2]))?;
        writeln!(f, "   date: {}", utils::bytes_to_hex(&id[2..4]))?;
        write!(f, "   serial: {}", utils::bytes_to_hex(&id[4..6]))
    }
}

/// PMm - Newtype Pattern (8 バイト)
///
/// Layout: IC code (ROM type, IC type) + 6 bytes of maximum response time
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pmm([u8; PMM_LEN]);

impl Pmm {
    pub fn from_bytes(bytes: [u8; PMM_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PMM_LEN] {
        &self.0
    }

    pub fn ic_code(&self) -> [u8; 2] {
        [self.0[0], self.0[1]]
    }

    pub fn rom_type(&self) -> u8 {
        self.0[0]
    }

    pub fn ic_type(&self) -> u8 {
        self.0[1]
    }

    /// Maximum response time parameters B3..B8.
    pub fn max_response_time(&self) -> [u8; 6] {
        let mut out = [0u8; 6];
        out.copy_from_slice(&self.0[2..]);
        out
    }
}

impl TryFrom<&[u8]> for Pmm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Ok(Self(fixed_array(bytes)?))
    }
}

impl fmt::Display for Pmm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const LABELS: [&str; 6] = [
            "B3(request service)",
            "B4(request response)",
            "B5(authenticate)",
            "B6(read)",
            "B7(write)",
            "B8()",
        ];
        writeln!(f, "PMm")?;
        writeln!(
            f,
            " IC code (2byte): {}",
            utils::bytes_to_hex(&self.ic_code())
        )?;
        writeln!(f, "   ROM type: {:02x}", self.rom_type())?;
        writeln!(f, "   IC type: {:02x}", self.ic_type())?;
        write!(f, " maximum response time (6byte)")?;
        for (label, b) in LABELS.iter().zip(self.max_response_time()) {
            write!(f, "\n  {}: {}", label, utils::byte_to_bin(b))?;
        }
        Ok(())
    }
}

fn fixed_array<const N: usize>(bytes: &[u8]) -> Result<[u8; N]> {
    if bytes.len() != N {
        return Err(Error::InvalidLength {
            expected: N,
            actual: bytes.len(),
        });
    }
    let mut arr = [0u8; N];
    arr.copy_from_slice(bytes);
    Ok(arr)
}

/// SystemCode (u16)
///
/// Sent big-endian in the Polling request.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "system code {:#06x}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemCode(u16);

impl SystemCode {
    pub const ANY: Self = Self(0xffff);
    pub const COMMON: Self = Self(0xfe00);
    pub const CYBERNE: Self = Self(0x0003);
    pub const SUICA: Self = Self(0x0003);

    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    pub fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }

    pub fn to_le_bytes(&self) -> [u8; 2] {
        self.0.to_le_bytes()
    }
}

/// ServiceCode (u16)
///
/// Sent little-endian in service code lists.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "service code {:#06x}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceCode(u16);

impl ServiceCode {
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn to_le_bytes(&self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }
}

/// Block (16 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block([u8; BLOCK_LEN]);

impl Block {
    pub fn from_bytes(bytes: [u8; BLOCK_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; BLOCK_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        utils::bytes_to_hex_spaced(self.as_bytes())
    }

    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl TryFrom<&[u8]> for Block {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Ok(Self(fixed_array(bytes)?))
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data : {}", self.to_hex())
    }
}

/// Access mode bits (6..4) of a block list element's flag byte.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccessMode {
    Decrement = 0x00,
    CashBack = 0x10,
}

impl AccessMode {
    fn from_flag(flag: u8) -> Self {
        if flag & ACCESS_MODE_MASK == AccessMode::CashBack as u8 {
            AccessMode::CashBack
        } else {
            AccessMode::Decrement
        }
    }
}

const LENGTH_2_BYTE: u8 = 0x80;
const ACCESS_MODE_MASK: u8 = 0x70;
const ORDER_MASK: u8 = 0x0f;

/// Block list element: flag byte followed by a one- or two-byte block
/// number.
///
/// The flag byte carries the length bit (0x80, set for the 2-byte form),
/// the access mode and the service code list order in its low nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockListElement {
    flag: u8,
    number: u16,
}

impl BlockListElement {
    /// Build from one or two big-endian block number bytes. One byte yields
    /// the 2-byte form, two bytes the 3-byte form.
    pub fn new(access_mode: AccessMode, order: u8, block_number: &[u8]) -> Result<Self> {
        match *block_number {
            [n] => Ok(Self::short(access_mode, order, n)),
            [hi, lo] => Ok(Self::long(access_mode, order, u16::from_be_bytes([hi, lo]))),
            _ => Err(Error::InvalidBlockList(format!(
                "block number must be 1 or 2 bytes, got {}",
                block_number.len()
            ))),
        }
    }

    /// 2-byte form: `[flag, number]`.
    pub fn short(access_mode: AccessMode, order: u8, number: u8) -> Self {
        Self {
            flag: access_mode as u8 | LENGTH_2_BYTE | (order & ORDER_MASK),
            number: number as u16,
        }
    }

    /// 3-byte form: `[flag, number_lo, number_hi]`.
    pub fn long(access_mode: AccessMode, order: u8, number: u16) -> Self {
        Self {
            flag: access_mode as u8 | (order & ORDER_MASK),
            number,
        }
    }

    /// Picks the 2-byte form whenever the number fits in one byte.
    pub fn for_block(access_mode: AccessMode, order: u8, number: u16) -> Self {
        match u8::try_from(number) {
            Ok(n) => Self::short(access_mode, order, n),
            Err(_) => Self::long(access_mode, order, number),
        }
    }

    pub fn flag(&self) -> u8 {
        self.flag
    }

    pub fn is_two_byte(&self) -> bool {
        self.flag & LENGTH_2_BYTE != 0
    }

    pub fn access_mode(&self) -> AccessMode {
        AccessMode::from_flag(self.flag)
    }

    pub fn service_order(&self) -> u8 {
        self.flag & ORDER_MASK
    }

    pub fn block_number(&self) -> u16 {
        self.number
    }

    pub fn encoded_len(&self) -> usize {
        if self.is_two_byte() { 2 } else { 3 }
    }

    /// FeliCa のブロックリストエレメントを 2 又は 3 バイトにエンコードする
    pub fn encode(&self) -> Vec<u8> {
        if self.is_two_byte() {
            vec![self.flag, self.number as u8]
        } else {
            let [lo, hi] = self.number.to_le_bytes();
            vec![self.flag, lo, hi]
        }
    }

    /// Parse one element from the front of `bytes`, returning it together
    /// with the number of bytes consumed.
    pub fn parse(bytes: &[u8]) -> Result<(Self, usize)> {
        let flag = *bytes.first().ok_or(Error::InvalidLength {
            expected: 2,
            actual: 0,
        })?;
        let len = if flag & LENGTH_2_BYTE != 0 { 2 } else { 3 };
        if bytes.len() < len {
            return Err(Error::InvalidLength {
                expected: len,
                actual: bytes.len(),
            });
        }
        let number = if len == 2 {
            bytes[1] as u16
        } else {
            u16::from_le_bytes([bytes[1], bytes[2]])
        };
        Ok((Self { flag, number }, len))
    }
}

impl fmt::Display for BlockListElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "block list element")?;
        writeln!(f, "  length : {} byte", self.encoded_len())?;
        writeln!(
            f,
            "  access mode : {}",
            utils::byte_to_bin(self.flag & (LENGTH_2_BYTE | ACCESS_MODE_MASK))
        )?;
        writeln!(f, "  service code list order: {:02x}", self.service_order())?;
        write!(f, "  block number : {:04x}", self.number)
    }
}

/// Status flag pair reported by the card in read/write responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusFlags {
    pub status1: u8,
    pub status2: u8,
}

impl StatusFlags {
    pub const fn new(status1: u8, status2: u8) -> Self {
        Self { status1, status2 }
    }

    /// Status flag 1 alone decides success.
    pub fn is_success(&self) -> bool {
        self.status1 == STATUS_FLAG1_NORMAL
    }
}

impl fmt::Display for StatusFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status=({:#04x}, {:#04x})", self.status1, self.status2)
    }
}

impl From<StatusFlags> for Error {
    fn from(s: StatusFlags) -> Self {
        Error::FelicaStatus {
            status1: s.status1,
            status2: s.status2,
        }
    }
}
