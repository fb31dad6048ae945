// libfelica/src/lib.rs

//! libfelica
//!
//! Pure Rust FeliCa command packet codec and card session: Polling, Read and
//! Write Without Encryption and the unauthenticated inquiry commands, over
//! any transport that can exchange one packet for one reply.

pub mod card;
pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod session;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
