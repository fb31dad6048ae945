// fixtures.rs: provides commonly used test IDs and reply packets

use libfelica::test_support;
use libfelica::types::{Block, Idm, Pmm, ServiceCode, SystemCode};

pub fn sample_idm_bytes() -> [u8; 8] {
    [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]
}

pub fn sample_pmm_bytes() -> [u8; 8] {
    [0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F, 0x10]
}

pub fn sample_system_code() -> SystemCode {
    SystemCode::new(0x0A0B)
}

pub fn sample_service_code() -> ServiceCode {
    ServiceCode::new(0x090F)
}

pub fn sample_idm() -> Idm {
    Idm::from_bytes(sample_idm_bytes())
}

pub fn sample_pmm() -> Pmm {
    Pmm::from_bytes(sample_pmm_bytes())
}

pub fn sample_block(fill: u8) -> Block {
    Block::from_bytes([fill; 16])
}

/// Polling reply echoing `sample_system_code` (request code 0x01).
pub fn polling_reply() -> Vec<u8> {
    let mut data = sample_pmm_bytes().to_vec();
    data.extend_from_slice(&sample_system_code().to_be_bytes());
    test_support::reply(0x01, sample_idm_bytes(), &data)
}

/// Polling reply carrying a different card.
pub fn polling_reply_for(idm: [u8; 8]) -> Vec<u8> {
    test_support::polling_reply(idm, sample_pmm_bytes())
}

pub fn read_reply_with_block(block: &[u8; 16]) -> Vec<u8> {
    let mut data = vec![0x00, 0x00, 0x01]; // status1, status2, block count
    data.extend_from_slice(block);
    test_support::reply(0x07, sample_idm_bytes(), &data)
}

pub fn read_reply_err(status1: u8, status2: u8) -> Vec<u8> {
    test_support::reply(0x07, sample_idm_bytes(), &[status1, status2])
}

pub fn write_reply_ok() -> Vec<u8> {
    test_support::reply(0x09, sample_idm_bytes(), &[0x00, 0x00])
}

pub fn write_reply_err(status1: u8, status2: u8) -> Vec<u8> {
    test_support::reply(0x09, sample_idm_bytes(), &[status1, status2])
}

/// Polling reply without a system code echo, as hex.
pub const BARE_POLLING_HEX: &str = "12 01 01 14 0a 0b 0c 0d 0e 0f 01 20 22 04 27 67 4e ff";
