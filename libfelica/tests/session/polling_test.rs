#[path = "../common/mod.rs"]
mod common;

use libfelica::session::SessionBuilder;
use libfelica::transport::MockTransport;
use libfelica::types::SystemCode;
use libfelica::{Error, TransportError};

#[test]
fn polling_any_encodes_and_discovers_card() {
    let mut session = common::idle_session(vec![common::fixtures::polling_reply()]);
    let card = session.polling(SystemCode::ANY).unwrap();

    assert_eq!(
        session.transport().sent,
        vec![vec![0x06, 0x00, 0xFF, 0xFF, 0x01, 0x00]]
    );
    assert_eq!(card.idm(), &common::fixtures::sample_idm());
    assert_eq!(card.pmm(), &common::fixtures::sample_pmm());
    assert_eq!(session.idm(), Some(&common::fixtures::sample_idm()));
    assert_eq!(session.pmm(), Some(&common::fixtures::sample_pmm()));
}

#[test]
fn second_polling_replaces_card() {
    let other = [0xAA; 8];
    let mut session = common::idle_session(vec![
        common::fixtures::polling_reply(),
        common::fixtures::polling_reply_for(other),
    ]);
    session.polling(SystemCode::ANY).unwrap();
    session.polling(SystemCode::ANY).unwrap();
    assert_eq!(session.idm().unwrap().as_bytes(), &other);
}

#[test]
fn polling_without_reply_is_a_transport_failure() {
    let mut session = common::idle_session(vec![]);
    match session.polling(SystemCode::ANY) {
        Err(Error::Transport(TransportError::Timeout)) => {}
        other => panic!("expected Timeout, got {:?}", other),
    }
    assert!(session.card().is_none());
}

#[test]
fn builder_session_polls() {
    let mut session = SessionBuilder::new()
        .with_transport(MockTransport::with_responses(vec![common::fixtures::polling_reply()]))
        .build()
        .unwrap();
    let card = session.polling(SystemCode::COMMON).unwrap();
    assert_eq!(
        card.system_code(),
        Some(common::fixtures::sample_system_code())
    );
}
