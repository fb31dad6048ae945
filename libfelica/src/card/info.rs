use std::fmt;

use crate::protocol::PollingResponse;
use crate::types::{Idm, Pmm, SystemCode};

/// Compact information describing a discovered FeliCa card (IDm/PMm/SystemCode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardInfo {
    pub idm: Idm,
    pub pmm: Pmm,
    /// `None` when the card did not echo its system code.
    pub system_code: Option<SystemCode>,
}

impl CardInfo {
    pub fn new(idm: Idm, pmm: Pmm, system_code: Option<SystemCode>) -> Self {
        Self {
            idm,
            pmm,
            system_code,
        }
    }

    pub fn idm(&self) -> &Idm {
        &self.idm
    }

    pub fn pmm(&self) -> &Pmm {
        &self.pmm
    }

    pub fn system_code(&self) -> Option<SystemCode> {
        self.system_code
    }
}

impl From<PollingResponse> for CardInfo {
    fn from(r: PollingResponse) -> Self {
        CardInfo::new(r.idm, r.pmm, r.system_code)
    }
}

impl fmt::Display for CardInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.idm)?;
        write!(f, "{}", self.pmm)?;
        if let Some(sc) = self.system_code {
            write!(f, "\n{}", sc)?;
        }
        Ok(())
    }
}
