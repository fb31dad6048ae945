//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup and reply building so
//! tests across the crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::card::CardInfo;
use crate::constants::RESPONSE_HEADER_LEN;
use crate::session::{Session, SessionConfig};
use crate::transport::MockTransport;
use crate::types::{Idm, Pmm};

/// Encode a reply packet: `length | response_code | idm | data`.
#[doc(hidden)]
pub fn reply(response_code: u8, idm: [u8; 8], data: &[u8]) -> Vec<u8> {
    let mut v = Vec::with_capacity(RESPONSE_HEADER_LEN + data.len());
    v.push((RESPONSE_HEADER_LEN + data.len()) as u8);
    v.push(response_code);
    v.extend_from_slice(&idm);
    v.extend_from_slice(data);
    v
}

/// Polling reply carrying `pmm` and no system code.
#[doc(hidden)]
pub fn polling_reply(idm: [u8; 8], pmm: [u8; 8]) -> Vec<u8> {
    reply(0x01, idm, &pmm)
}

/// Idle session over a MockTransport pre-seeded with `responses`.
#[doc(hidden)]
pub fn mock_session(responses: Vec<Vec<u8>>) -> Session<MockTransport> {
    Session::new(MockTransport::with_responses(responses))
}

/// Session that already holds a discovered card with the given IDm. No
/// polling packet is recorded on the transport.
#[doc(hidden)]
pub fn discovered_session(
    idm: [u8; 8],
    config: SessionConfig,
    responses: Vec<Vec<u8>>,
) -> Session<MockTransport> {
    let mut session = Session::with_config(MockTransport::with_responses(responses), config);
    session.store_card(CardInfo::new(Idm::from_bytes(idm), Pmm::from_bytes([0; 8]), None));
    session
}
