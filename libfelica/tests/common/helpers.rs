// helpers.rs: session setup shared by the integration tests

use libfelica::session::{Session, SessionConfig};
use libfelica::test_support;
use libfelica::transport::MockTransport;

use super::fixtures;

/// Route `log` output through env_logger (RUST_LOG=libfelica=trace).
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parse a spaced hex literal into bytes.
pub fn hex_bytes(s: &str) -> Vec<u8> {
    hex::decode(s.replace(' ', "")).unwrap()
}

/// Session that has polled the sample card; the polling packet is cleared
/// from the transport log so tests see only their own packets.
pub fn polled_session(config: SessionConfig, responses: Vec<Vec<u8>>) -> Session<MockTransport> {
    init_logging();
    let mut all = vec![fixtures::polling_reply()];
    all.extend(responses);
    let mut session = Session::with_config(MockTransport::with_responses(all), config);
    session.polling(fixtures::sample_system_code()).unwrap();
    session.transport_mut().sent.clear();
    session
}

pub fn idle_session(responses: Vec<Vec<u8>>) -> Session<MockTransport> {
    init_logging();
    test_support::mock_session(responses)
}
