#[path = "../common/mod.rs"]
mod common;

use libfelica::Error;
use libfelica::protocol::BlockCountMode;
use libfelica::session::{CardOutcome, SessionConfig};
use libfelica::types::StatusFlags;

#[test]
fn write_default_sends_true_block_count() {
    let mut session = common::polled_session(
        SessionConfig::default(),
        vec![common::fixtures::write_reply_ok()],
    );
    let out = session
        .write_without_encryption(
            common::fixtures::sample_service_code(),
            0x03,
            &common::fixtures::sample_block(0x5A),
        )
        .unwrap();
    assert_eq!(out, CardOutcome::Success(()));

    let sent = &session.transport().sent[0];
    assert_eq!(sent.len(), 32);
    assert_eq!(&sent[10..16], &[0x01, 0x0f, 0x09, 0x01, 0x80, 0x03]);
    assert_eq!(&sent[16..], &[0x5A; 16]);
}

#[test]
fn write_legacy_sends_payload_length() {
    let config = SessionConfig::default().with_block_count_mode(BlockCountMode::PayloadLength);
    let mut session = common::polled_session(config, vec![common::fixtures::write_reply_ok()]);
    session
        .write_without_encryption(
            common::fixtures::sample_service_code(),
            0x03,
            &common::fixtures::sample_block(0x5A),
        )
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(session.transport().sent[0][13], 16);
}

#[test]
fn write_status_error_is_card_error() {
    let mut session = common::polled_session(
        SessionConfig::default(),
        vec![common::fixtures::write_reply_err(0xFF, 0x70)],
    );
    let out = session
        .write_without_encryption(
            common::fixtures::sample_service_code(),
            0x03,
            &common::fixtures::sample_block(0),
        )
        .unwrap();
    assert_eq!(out.status(), Some(StatusFlags::new(0xFF, 0x70)));
    match out.into_result() {
        Err(Error::FelicaStatus {
            status1: 0xFF,
            status2: 0x70,
        }) => {}
        other => panic!("expected FelicaStatus, got {:?}", other),
    }
}

#[test]
fn write_success_ignores_last_idm_byte() {
    // The status pair follows the IDm; a non-zero last IDm byte must not
    // be read as a status flag.
    let idm = [1, 2, 3, 4, 5, 6, 7, 0xFF];
    let reply = libfelica::test_support::reply(0x09, idm, &[0x00, 0x00]);
    let mut session = libfelica::test_support::discovered_session(
        idm,
        SessionConfig::default(),
        vec![reply],
    );
    let out = session
        .write_without_encryption(
            common::fixtures::sample_service_code(),
            0,
            &common::fixtures::sample_block(1),
        )
        .unwrap();
    assert!(out.is_success());
}

#[test]
fn write_header_only_reply_is_card_error() {
    let idm = [1, 2, 3, 4, 5, 6, 7, 0xFF];
    let reply = common::hex_bytes("0a 09 01 02 03 04 05 06 07 ff");
    let mut session = libfelica::test_support::discovered_session(
        idm,
        SessionConfig::default(),
        vec![reply],
    );
    let out = session
        .write_without_encryption(
            common::fixtures::sample_service_code(),
            0,
            &common::fixtures::sample_block(1),
        )
        .unwrap();
    assert_eq!(out, CardOutcome::CardError(StatusFlags::new(0xFF, 0x00)));
}

#[test]
fn write_before_polling_is_no_session() {
    let mut session = common::idle_session(vec![]);
    assert!(matches!(
        session.write_without_encryption(
            common::fixtures::sample_service_code(),
            0,
            &common::fixtures::sample_block(0),
        ),
        Err(Error::NoSession)
    ));
}
