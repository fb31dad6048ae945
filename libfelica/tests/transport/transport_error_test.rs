#[path = "../common/mod.rs"]
mod common;

use libfelica::session::SessionConfig;
use libfelica::transport::MockTransport;
use libfelica::types::SystemCode;
use libfelica::{Error, TransportError};

#[test]
fn each_transport_failure_surfaces_unchanged() {
    let failures = [
        TransportError::Timeout,
        TransportError::NoTag,
        TransportError::TagLost,
        TransportError::Io("link reset".into()),
    ];
    for failure in failures {
        let mut mock = MockTransport::new();
        mock.push_error(failure.clone());
        let mut session = libfelica::session::Session::new(mock);
        match session.polling(SystemCode::ANY) {
            Err(Error::Transport(e)) => assert_eq!(e, failure),
            other => panic!("expected {:?}, got {:?}", failure, other),
        }
    }
}

#[test]
fn empty_reply_is_no_response() {
    let mut session = common::polled_session(SessionConfig::default(), vec![vec![]]);
    match session.request_response() {
        Err(Error::Transport(TransportError::NoResponse)) => {}
        other => panic!("expected NoResponse, got {:?}", other),
    }
}

#[test]
fn transport_error_display() {
    let e = Error::from(TransportError::Io("usb stall".into()));
    assert!(e.to_string().contains("usb stall"));
}
