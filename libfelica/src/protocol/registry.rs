// libfelica/src/protocol/registry.rs

//! Closed table of known FeliCa command and response codes.
//!
//! Commands and their responses are paired as `code` / `code + 1`. The
//! pairing is diagnostic: the response decoder never checks it.

use crate::constants::*;

/// One registry row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry {
    pub code: u8,
    pub name: &'static str,
    pub is_response: bool,
}

const fn command(code: u8, name: &'static str) -> CodeEntry {
    CodeEntry {
        code,
        name,
        is_response: false,
    }
}

const fn response(code: u8, name: &'static str) -> CodeEntry {
    CodeEntry {
        code,
        name,
        is_response: true,
    }
}

pub const REGISTRY: [CodeEntry; 22] = [
    command(COMMAND_POLLING, "Polling"),
    response(RESPONSE_POLLING, "Polling(response)"),
    command(COMMAND_REQUEST_SERVICE, "Request Service"),
    response(RESPONSE_REQUEST_SERVICE, "Request Service(response)"),
    command(COMMAND_REQUEST_RESPONSE, "Request Response"),
    response(RESPONSE_REQUEST_RESPONSE, "Request Response(response)"),
    command(COMMAND_READ_WO_ENCRYPTION, "Read Without Encryption"),
    response(
        RESPONSE_READ_WO_ENCRYPTION,
        "Read Without Encryption(response)",
    ),
    command(COMMAND_WRITE_WO_ENCRYPTION, "Write Without Encryption"),
    response(
        RESPONSE_WRITE_WO_ENCRYPTION,
        "Write Without Encryption(response)",
    ),
    command(COMMAND_SEARCH_SERVICE_CODE, "Search Service"),
    response(RESPONSE_SEARCH_SERVICE_CODE, "Search Service(response)"),
    command(COMMAND_REQUEST_SYSTEM_CODE, "Request System Code"),
    response(
        RESPONSE_REQUEST_SYSTEM_CODE,
        "Request System Code(response)",
    ),
    command(COMMAND_AUTHENTICATION1, "Authentication1"),
    response(RESPONSE_AUTHENTICATION1, "Authentication1(response)"),
    command(COMMAND_AUTHENTICATION2, "Authentication2"),
    response(RESPONSE_AUTHENTICATION2, "Authentication2(response)"),
    command(COMMAND_READ, "Read"),
    response(RESPONSE_READ, "Read(response)"),
    command(COMMAND_WRITE, "Write"),
    response(RESPONSE_WRITE, "Write(response)"),
];

pub fn lookup(code: u8) -> Option<&'static CodeEntry> {
    REGISTRY.iter().find(|e| e.code == code)
}

pub fn is_known(code: u8) -> bool {
    lookup(code).is_some()
}

pub fn name_of(code: u8) -> Option<&'static str> {
    lookup(code).map(|e| e.name)
}

/// Response code paired with a registered command code.
pub fn response_code_for(command: u8) -> Option<u8> {
    match lookup(command) {
        Some(e) if !e.is_response => {
            let resp = command.wrapping_add(1);
            lookup(resp).filter(|r| r.is_response).map(|r| r.code)
        }
        _ => None,
    }
}

/// Display name, falling back to a hex rendering for unknown codes.
pub(crate) fn describe(code: u8) -> String {
    match name_of(code) {
        Some(name) => name.to_string(),
        None => format!("unknown({:#04x})", code),
    }
}
