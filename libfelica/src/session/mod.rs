// libfelica/src/session/mod.rs

//! Card session: the operation façade over a [`Transport`].
//!
//! A session starts idle. A successful [`Session::polling`] stores the
//! discovered card, and every other operation is addressed to that card's
//! IDm. Polling again first forgets the current card.

use log::{debug, trace, warn};

use crate::card::CardInfo;
use crate::error::TransportError;
use crate::protocol::{Command, CommandResponse, SearchResult, registry};
use crate::transport::Transport;
use crate::types::{Block, BlockListElement, Idm, Pmm, ServiceCode, SystemCode};
use crate::utils;
use crate::{Error, Result};

pub mod builder;
pub mod config;
pub mod operations;
mod outcome;

pub use builder::SessionBuilder;
pub use config::SessionConfig;
pub use operations::ServiceIterator;
pub use outcome::CardOutcome;

#[derive(Debug)]
pub struct Session<T> {
    transport: T,
    config: SessionConfig,
    card: Option<CardInfo>,
}

impl<T: Transport> Session<T> {
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, SessionConfig::default())
    }

    pub fn with_config(transport: T, config: SessionConfig) -> Self {
        Self {
            transport,
            config,
            card: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SessionConfig) {
        self.config = config;
    }

    /// Card discovered by the last successful polling.
    pub fn card(&self) -> Option<&CardInfo> {
        self.card.as_ref()
    }

    pub fn idm(&self) -> Option<&Idm> {
        self.card.as_ref().map(|c| &c.idm)
    }

    pub fn pmm(&self) -> Option<&Pmm> {
        self.card.as_ref().map(|c| &c.pmm)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Send one command and decode the reply header.
    ///
    /// An empty reply becomes `TransportError::NoResponse`. When
    /// `check_response_code` is set, a reply whose code is not the command
    /// code + 1 is rejected with `UnexpectedResponse`.
    pub fn execute(&mut self, cmd: &Command) -> Result<CommandResponse> {
        let request = cmd.encode()?;
        debug!(
            "transceive {} ({} bytes)",
            registry::describe(cmd.command_code()),
            request.len()
        );
        trace!("request: {}", utils::bytes_to_hex_spaced(&request));

        let reply = self
            .transport
            .transceive(&request, self.config.timeout_ms)?;
        if reply.is_empty() {
            return Err(TransportError::NoResponse.into());
        }
        trace!("reply: {}", utils::bytes_to_hex_spaced(&reply));

        let resp = CommandResponse::decode(&reply)?;
        if self.config.check_response_code {
            resp.expect_code(cmd.response_code()).inspect_err(|_| {
                warn!(
                    "unexpected reply {} to {}",
                    registry::describe(resp.response_code()),
                    registry::describe(cmd.command_code())
                )
            })?;
        }
        Ok(resp)
    }

    /// IDm of the discovered card, or `NoSession` while idle.
    pub(crate) fn require_idm(&self) -> Result<Idm> {
        self.card.map(|c| c.idm).ok_or(Error::NoSession)
    }

    pub(crate) fn forget_card(&mut self) {
        if let Some(card) = self.card.take() {
            debug!("session idle (forgot card {})", card.idm.to_hex());
        }
    }

    pub(crate) fn store_card(&mut self, card: CardInfo) {
        debug!("session discovered card {}", card.idm.to_hex());
        self.card = Some(card);
    }

    /// Poll for a card of `system_code` and make it the session's card.
    pub fn polling(&mut self, system_code: SystemCode) -> Result<CardInfo> {
        operations::polling(self, system_code)
    }

    /// Read one block addressed by a one-byte block number.
    pub fn read_without_encryption(
        &mut self,
        service: ServiceCode,
        addr: u8,
    ) -> Result<CardOutcome<Block>> {
        operations::read_without_encryption(self, service, addr)
    }

    /// Write one block addressed by a one-byte block number.
    pub fn write_without_encryption(
        &mut self,
        service: ServiceCode,
        addr: u8,
        block: &Block,
    ) -> Result<CardOutcome<()>> {
        operations::write_without_encryption(self, service, addr, block)
    }

    pub fn read_blocks(
        &mut self,
        services: &[ServiceCode],
        elements: &[BlockListElement],
    ) -> Result<CardOutcome<Vec<Block>>> {
        operations::read_blocks(self, services, elements)
    }

    pub fn write_blocks(
        &mut self,
        services: &[ServiceCode],
        blocks: &[(BlockListElement, Block)],
    ) -> Result<CardOutcome<()>> {
        operations::write_blocks(self, services, blocks)
    }

    /// Current mode of the card.
    pub fn request_response(&mut self) -> Result<u8> {
        operations::request_response(self)
    }

    /// Key versions of the given area/service codes; `0xffff` for a missing node.
    pub fn request_service(&mut self, node_codes: &[u16]) -> Result<Vec<u16>> {
        operations::request_service(self, node_codes)
    }

    pub fn request_system_code(&mut self) -> Result<Vec<SystemCode>> {
        operations::request_system_code(self)
    }

    pub fn search_service_code(&mut self, index: u16) -> Result<Option<SearchResult>> {
        operations::search_service_code(self, index)
    }

    /// Iterate over every area/service code of the card, in index order.
    pub fn services(&mut self) -> ServiceIterator<'_, T> {
        ServiceIterator::new(self)
    }
}
