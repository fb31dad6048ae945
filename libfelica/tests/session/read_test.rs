#[path = "../common/mod.rs"]
mod common;

use libfelica::session::{CardOutcome, SessionConfig};
use libfelica::types::{AccessMode, Block, BlockListElement, StatusFlags};
use libfelica::{Error, TransportError};

#[test]
fn read_success_returns_block_unchanged() {
    let payload: [u8; 16] = *b"felica block 01!";
    let mut session = common::polled_session(
        SessionConfig::default(),
        vec![common::fixtures::read_reply_with_block(&payload)],
    );

    let out = session
        .read_without_encryption(common::fixtures::sample_service_code(), 0x01)
        .unwrap();
    assert_eq!(out, CardOutcome::Success(Block::from_bytes(payload)));
    assert_eq!(
        session.transport().sent,
        vec![common::hex_bytes("10 06 01 02 03 04 05 06 07 08 01 0f 09 01 80 01")]
    );
}

#[test]
fn read_card_error_never_returns_payload() {
    let mut session = common::polled_session(
        SessionConfig::default(),
        vec![common::fixtures::read_reply_err(0xFF, 0xA1)],
    );
    let out = session
        .read_without_encryption(common::fixtures::sample_service_code(), 0x40)
        .unwrap();
    assert_eq!(out, CardOutcome::CardError(StatusFlags::new(0xFF, 0xA1)));
    assert!(out.ok().is_none());
}

#[test]
fn read_header_only_reply_is_card_error() {
    // Exactly the 10-byte header; the last IDm byte must not be taken for a
    // status flag.
    let idm = [1, 2, 3, 4, 5, 6, 7, 0xFF];
    let reply = common::hex_bytes("0a 07 01 02 03 04 05 06 07 ff");
    let mut session = libfelica::test_support::discovered_session(
        idm,
        SessionConfig::default(),
        vec![reply],
    );
    let out = session
        .read_without_encryption(common::fixtures::sample_service_code(), 0)
        .unwrap();
    assert_eq!(out, CardOutcome::CardError(StatusFlags::new(0xFF, 0x00)));
    assert!(session.card().is_some());
}

#[test]
fn read_reply_shorter_than_header_is_malformed() {
    let reply = common::hex_bytes("09 07 01 02 03 04 05 06 07");
    let mut session = common::polled_session(SessionConfig::default(), vec![reply]);
    assert!(matches!(
        session.read_without_encryption(common::fixtures::sample_service_code(), 0),
        Err(Error::MalformedResponse { .. })
    ));
}

#[test]
fn read_before_polling_is_no_session() {
    let mut session = common::idle_session(vec![]);
    assert!(matches!(
        session.read_without_encryption(common::fixtures::sample_service_code(), 0),
        Err(Error::NoSession)
    ));
    assert!(session.transport().sent.is_empty());
}

#[test]
fn read_transport_failure_keeps_session() {
    let mut session = common::polled_session(SessionConfig::default(), vec![]);
    session.transport_mut().push_error(TransportError::TagLost);
    match session.read_without_encryption(common::fixtures::sample_service_code(), 0) {
        Err(Error::Transport(TransportError::TagLost)) => {}
        other => panic!("expected TagLost, got {:?}", other),
    }
    // No retry was attempted.
    assert_eq!(session.transport().sent.len(), 1);
    assert!(session.card().is_some());
}

#[test]
fn read_blocks_multiple() {
    let mut data = vec![0x00, 0x00, 0x02];
    data.extend_from_slice(&[0x11; 16]);
    data.extend_from_slice(&[0x22; 16]);
    let reply = libfelica::test_support::reply(0x07, common::fixtures::sample_idm_bytes(), &data);
    let mut session = common::polled_session(SessionConfig::default(), vec![reply]);

    let blocks = session
        .read_blocks(
            &[common::fixtures::sample_service_code()],
            &[
                BlockListElement::short(AccessMode::Decrement, 0, 0),
                BlockListElement::long(AccessMode::Decrement, 0, 0x0100),
            ],
        )
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(
        blocks,
        vec![
            common::fixtures::sample_block(0x11),
            common::fixtures::sample_block(0x22)
        ]
    );
    assert_eq!(
        &session.transport().sent[0][10..],
        &[0x01, 0x0f, 0x09, 0x02, 0x80, 0x00, 0x00, 0x00, 0x01][..]
    );
}
