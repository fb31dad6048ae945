use crate::Result;
use crate::card::CardInfo;
use crate::constants::{POLLING_REQUEST_SYSTEM_CODE, POLLING_TIME_SLOT};
use crate::protocol::{Command, decode_polling};
use crate::session::Session;
use crate::transport::Transport;
use crate::types::SystemCode;

/// Poll for a card and make it the session's current card.
///
/// The previous card is forgotten before the request goes out, so a failed
/// polling leaves the session idle.
pub fn polling<T: Transport>(
    session: &mut Session<T>,
    system_code: SystemCode,
) -> Result<CardInfo> {
    session.forget_card();

    let cmd = Command::Polling {
        system_code,
        request_code: POLLING_REQUEST_SYSTEM_CODE,
        time_slot: POLLING_TIME_SLOT,
    };
    let resp = session.execute(&cmd)?;
    let card = CardInfo::from(decode_polling(&resp)?);
    session.store_card(card);
    Ok(card)
}
