// libfelica/src/error.rs

use thiserror::Error;

/// Failure reported by a [`Transport`](crate::transport::Transport) when a
/// transceive did not produce a usable reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("transceive timed out")]
    Timeout,

    #[error("no tag present")]
    NoTag,

    #[error("tag lost during exchange")]
    TagLost,

    #[error("transceive returned no data")]
    NoResponse,

    #[error("transport i/o error: {0}")]
    Io(String),
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("unsupported command code {code:#04x}")]
    UnsupportedCommand { code: u8 },

    #[error("frame too large: {length} bytes exceeds the 255 byte length field")]
    FrameTooLarge { length: usize },

    #[error("malformed response: need at least {expected} bytes, got {actual}")]
    MalformedResponse { expected: usize, actual: usize },

    #[error("no card session: polling has not succeeded")]
    NoSession,

    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid block list: {0}")]
    InvalidBlockList(String),

    #[error("invalid node count: must be 1..=32, got {count}")]
    InvalidNodeCount { count: usize },

    #[error("felica error: status=({status1:#04x}, {status2:#04x})")]
    FelicaStatus { status1: u8, status2: u8 },

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("session builder has no transport")]
    TransportMissing,
}

pub type Result<T> = std::result::Result<T, Error>;
