// libfelica/src/protocol/mod.rs

pub mod block_list;
pub mod commands;
pub mod packet;
pub mod parser;
pub mod registry;
pub mod response;
pub mod responses;

pub use block_list::ServiceBlockList;
pub use commands::{
    BlockCountMode, Command, encode_discovery, encode_polling, encode_read,
    encode_request_response, encode_request_service, encode_request_system_code,
    encode_search_service_code, encode_write,
};
pub use packet::CommandPacket;
pub use response::CommandResponse;
pub use responses::{
    PollingResponse, ReadResponse, Response, SearchResult, WriteResponse, decode_polling,
    decode_read, decode_request_response, decode_request_service, decode_request_system_code,
    decode_search_service_code, decode_write,
};
