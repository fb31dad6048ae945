// libfelica/src/transport/mock.rs

use std::collections::VecDeque;

use crate::error::TransportError;
use crate::transport::traits::Transport;

/// Mock transport for unit tests. It records sent packets and returns queued
/// replies (or queued failures) in order.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub responses: VecDeque<Result<Vec<u8>, TransportError>>,
    /// Timeout passed to each transceive call.
    pub timeouts: Vec<u64>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mock pre-seeded with successful replies.
    pub fn with_responses<I>(responses: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        let mut m = Self::new();
        for r in responses {
            m.push_response(r);
        }
        m
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(Ok(resp));
    }

    pub fn push_error(&mut self, err: TransportError) {
        self.responses.push_back(Err(err));
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    pub fn last_sent(&self) -> Option<&[u8]> {
        self.sent.last().map(Vec::as_slice)
    }

    pub fn pending(&self) -> usize {
        self.responses.len()
    }
}

impl Transport for MockTransport {
    fn transceive(&mut self, request: &[u8], timeout_ms: u64) -> Result<Vec<u8>, TransportError> {
        self.sent.push(request.to_vec());
        self.timeouts.push(timeout_ms);
        // An exhausted queue behaves like a card that never answers.
        self.responses
            .pop_front()
            .unwrap_or(Err(TransportError::Timeout))
    }
}
