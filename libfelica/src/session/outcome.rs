// libfelica/src/session/outcome.rs

use crate::Result;
use crate::constants::STATUS_FLAG1_ERROR;
use crate::types::StatusFlags;

/// Result of an operation the card itself can refuse.
///
/// A refusal is not an `Err`: the card answered, and both status flags are
/// kept for the caller.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardOutcome<T> {
    Success(T),
    CardError(StatusFlags),
}

impl<T> CardOutcome<T> {
    /// `Success(value())` when `status` reports success, `CardError` otherwise.
    pub(crate) fn from_status(status: StatusFlags, value: impl FnOnce() -> T) -> Self {
        if status.is_success() {
            CardOutcome::Success(value())
        } else {
            CardOutcome::CardError(status)
        }
    }

    /// Refusal for a reply whose header arrived without the status flags.
    pub(crate) fn missing_status() -> Self {
        CardOutcome::CardError(StatusFlags::new(STATUS_FLAG1_ERROR, 0))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CardOutcome::Success(_))
    }

    pub fn ok(self) -> Option<T> {
        match self {
            CardOutcome::Success(v) => Some(v),
            CardOutcome::CardError(_) => None,
        }
    }

    /// Status flags of a refused operation.
    pub fn status(&self) -> Option<StatusFlags> {
        match self {
            CardOutcome::Success(_) => None,
            CardOutcome::CardError(s) => Some(*s),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> CardOutcome<U> {
        match self {
            CardOutcome::Success(v) => CardOutcome::Success(f(v)),
            CardOutcome::CardError(s) => CardOutcome::CardError(s),
        }
    }

    /// Turn a card refusal into `Error::FelicaStatus`.
    pub fn into_result(self) -> Result<T> {
        match self {
            CardOutcome::Success(v) => Ok(v),
            CardOutcome::CardError(s) => Err(s.into()),
        }
    }
}
