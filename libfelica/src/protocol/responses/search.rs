// libfelica/src/protocol/responses/search.rs

use crate::Result;
use crate::protocol::{CommandResponse, parser};

/// Area/service code returned for the searched index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchResult {
    Area { code: u16, end: u16 },
    Service(u16),
}

/// Code returned by the card once the index runs past the last node.
const END_OF_NODES: u16 = 0xffff;

/// Decode SearchServiceCode response (response code = 0x0B)
/// Data layout: code(2, little endian) + [end_service_code(2) for areas]
pub fn decode_search_service_code(resp: &CommandResponse) -> Result<Option<SearchResult>> {
    let data = resp.data();
    let code = parser::le_u16_at(data, 0)?;
    if code == END_OF_NODES {
        return Ok(None);
    }
    if data.len() >= 4 {
        let end = parser::le_u16_at(data, 2)?;
        Ok(Some(SearchResult::Area { code, end }))
    } else {
        Ok(Some(SearchResult::Service(code)))
    }
}
