// libfelica/src/constants.rs
//! Common protocol constants used across the crate

/// Polling (discovery) command / response codes
pub const COMMAND_POLLING: u8 = 0x00;
pub const RESPONSE_POLLING: u8 = 0x01;

pub const COMMAND_REQUEST_SERVICE: u8 = 0x02;
pub const RESPONSE_REQUEST_SERVICE: u8 = 0x03;

pub const COMMAND_REQUEST_RESPONSE: u8 = 0x04;
pub const RESPONSE_REQUEST_RESPONSE: u8 = 0x05;

pub const COMMAND_READ_WO_ENCRYPTION: u8 = 0x06;
pub const RESPONSE_READ_WO_ENCRYPTION: u8 = 0x07;

pub const COMMAND_WRITE_WO_ENCRYPTION: u8 = 0x08;
pub const RESPONSE_WRITE_WO_ENCRYPTION: u8 = 0x09;

pub const COMMAND_SEARCH_SERVICE_CODE: u8 = 0x0a;
pub const RESPONSE_SEARCH_SERVICE_CODE: u8 = 0x0b;

pub const COMMAND_REQUEST_SYSTEM_CODE: u8 = 0x0c;
pub const RESPONSE_REQUEST_SYSTEM_CODE: u8 = 0x0d;

/// Authenticated command family. Registered for diagnostics only.
pub const COMMAND_AUTHENTICATION1: u8 = 0x10;
pub const RESPONSE_AUTHENTICATION1: u8 = 0x11;
pub const COMMAND_AUTHENTICATION2: u8 = 0x12;
pub const RESPONSE_AUTHENTICATION2: u8 = 0x13;
pub const COMMAND_READ: u8 = 0x14;
pub const RESPONSE_READ: u8 = 0x15;
pub const COMMAND_WRITE: u8 = 0x16;
pub const RESPONSE_WRITE: u8 = 0x17;

/// Polling request code asking the card to echo its system code
pub const POLLING_REQUEST_SYSTEM_CODE: u8 = 0x01;

/// Polling time slot. Multi-slot discovery is not used.
pub const POLLING_TIME_SLOT: u8 = 0x00;

/// Size of the fixed response header: length(1) + code(1) + IDm(8)
pub const RESPONSE_HEADER_LEN: usize = 10;

/// Length byte + command code byte
pub const PACKET_PREFIX_LEN: usize = 2;

/// Maximum encoded packet size; the length field is a single byte.
pub const MAX_PACKET_LEN: usize = 255;

pub const IDM_LEN: usize = 8;
pub const PMM_LEN: usize = 8;
pub const BLOCK_LEN: usize = 16;

/// Maximum number of entries in a service code list
pub const MAX_SERVICES: usize = 16;

/// Maximum number of node codes in a Request Service command
pub const MAX_NODE_CODES: usize = 32;

/// Status flag 1 values
pub const STATUS_FLAG1_NORMAL: u8 = 0x00;
pub const STATUS_FLAG1_ERROR: u8 = 0xff;

/// Status flag 2 values
pub const STATUS_FLAG2_NORMAL: u8 = 0x00;
pub const STATUS_FLAG2_ERROR_LENGTH: u8 = 0x01;
pub const STATUS_FLAG2_ERROR_FLOWN: u8 = 0x02;
pub const STATUS_FLAG2_ERROR_MEMORY: u8 = 0x70;
pub const STATUS_FLAG2_ERROR_WRITE_LIMIT: u8 = 0x71;

/// Service codes of the transit-card history areas (little endian on the wire)
pub const SERVICE_SUICA_INOUT: u16 = 0x108f;
pub const SERVICE_SUICA_HISTORY: u16 = 0x090f;
