use crate::Result;
use crate::protocol::{
    Command, SearchResult, decode_request_response, decode_request_service,
    decode_request_system_code, decode_search_service_code,
};
use crate::session::Session;
use crate::transport::Transport;
use crate::types::SystemCode;

/// Current mode of the card (RequestResponse).
pub fn request_response<T: Transport>(session: &mut Session<T>) -> Result<u8> {
    let idm = session.require_idm()?;
    let resp = session.execute(&Command::RequestResponse { idm })?;
    decode_request_response(&resp)
}

/// Key versions for the given area/service codes (RequestService).
pub fn request_service<T: Transport>(
    session: &mut Session<T>,
    node_codes: &[u16],
) -> Result<Vec<u16>> {
    let idm = session.require_idm()?;
    let resp = session.execute(&Command::RequestService {
        idm,
        node_codes: node_codes.to_vec(),
    })?;
    decode_request_service(&resp)
}

/// System codes present on the card (RequestSystemCode).
pub fn request_system_code<T: Transport>(session: &mut Session<T>) -> Result<Vec<SystemCode>> {
    let idm = session.require_idm()?;
    let resp = session.execute(&Command::RequestSystemCode { idm })?;
    decode_request_system_code(&resp)
}

/// Area or service code at `index` (SearchServiceCode); `None` past the end.
pub fn search_service_code<T: Transport>(
    session: &mut Session<T>,
    index: u16,
) -> Result<Option<SearchResult>> {
    let idm = session.require_idm()?;
    let resp = session.execute(&Command::SearchServiceCode { idm, index })?;
    decode_search_service_code(&resp)
}

/// Iterator over area/service codes returned by SearchServiceCode.
///
/// Stops after the end marker, after the first error or once the index
/// space is exhausted.
pub struct ServiceIterator<'a, T> {
    session: &'a mut Session<T>,
    current_index: u16,
    finished: bool,
}

impl<'a, T: Transport> ServiceIterator<'a, T> {
    pub fn new(session: &'a mut Session<T>) -> Self {
        Self {
            session,
            current_index: 0,
            finished: false,
        }
    }
}

impl<T: Transport> Iterator for ServiceIterator<'_, T> {
    type Item = Result<SearchResult>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match search_service_code(self.session, self.current_index) {
            Ok(Some(found)) => {
                match self.current_index.checked_add(1) {
                    Some(next) => self.current_index = next,
                    None => self.finished = true,
                }
                Some(Ok(found))
            }
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
