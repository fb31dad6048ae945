#[path = "../common/mod.rs"]
mod common;

use libfelica::Error;
use libfelica::protocol::SearchResult;
use libfelica::session::SessionConfig;
use libfelica::test_support::reply;
use libfelica::types::SystemCode;

fn idm() -> [u8; 8] {
    common::fixtures::sample_idm_bytes()
}

#[test]
fn request_system_code_lists_codes() {
    let mut session = common::polled_session(
        SessionConfig::default(),
        vec![reply(0x0d, idm(), &[0x02, 0x00, 0x03, 0xfe, 0x00])],
    );
    assert_eq!(
        session.request_system_code().unwrap(),
        vec![SystemCode::SUICA, SystemCode::COMMON]
    );
}

#[test]
fn request_service_and_response() {
    let mut session = common::polled_session(
        SessionConfig::default(),
        vec![
            reply(0x03, idm(), &[0x02, 0x00, 0x00, 0xff, 0xff]),
            reply(0x05, idm(), &[0x00]),
        ],
    );
    assert_eq!(
        session.request_service(&[0x090f, 0x1234]).unwrap(),
        vec![0x0000, 0xffff]
    );
    assert_eq!(session.request_response().unwrap(), 0x00);
}

#[test]
fn search_walks_all_nodes() {
    let mut session = common::polled_session(
        SessionConfig::default(),
        vec![
            reply(0x0b, idm(), &[0x00, 0x00, 0xfe, 0xff]),
            reply(0x0b, idm(), &[0x0f, 0x09]),
            reply(0x0b, idm(), &[0xff, 0xff]),
        ],
    );
    let nodes: Vec<_> = session
        .services()
        .collect::<libfelica::Result<_>>()
        .unwrap();
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[1], SearchResult::Service(0x090f));
}

#[test]
fn wrong_reply_code_is_unexpected_response() {
    let mut session = common::polled_session(
        SessionConfig::default(),
        vec![reply(0x07, idm(), &[0x00])],
    );
    match session.request_response() {
        Err(Error::UnexpectedResponse {
            expected: 0x05,
            actual: 0x07,
        }) => {}
        other => panic!("expected UnexpectedResponse, got {:?}", other),
    }
}

#[test]
fn request_service_rejects_node_count_before_sending() {
    let mut session = common::polled_session(SessionConfig::default(), vec![]);
    assert!(matches!(
        session.request_service(&[0x090f; 33]),
        Err(Error::InvalidNodeCount { count: 33 })
    ));
    assert!(matches!(
        session.request_service(&[]),
        Err(Error::InvalidNodeCount { count: 0 })
    ));
    assert!(session.transport().sent.is_empty());
}
