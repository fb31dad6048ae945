pub mod polling;
pub mod read;
pub mod service;
pub mod write;

// Re-export at the operations root so callers can use
// `crate::session::operations::read_blocks(...)`.
pub use polling::polling;
pub use read::{read_blocks, read_without_encryption};
pub use service::{
    ServiceIterator, request_response, request_service, request_system_code, search_service_code,
};
pub use write::{write_blocks, write_without_encryption};
