// libfelica/src/prelude.rs

pub use crate::card::CardInfo;
pub use crate::protocol::{
    BlockCountMode, Command, CommandPacket, CommandResponse, Response, SearchResult,
    ServiceBlockList,
};
pub use crate::session::{CardOutcome, Session, SessionBuilder, SessionConfig};
pub use crate::transport::{MockTransport, Transport};
pub use crate::{
    AccessMode, Block, BlockListElement, Error, Idm, Pmm, Result, ServiceCode, StatusFlags,
    SystemCode, TransportError,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms};
