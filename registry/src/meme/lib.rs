use crate::{events::EventLog, share_token::ShareToken, *};
use super::lifecycle::EntryLifecycle;
use std::fmt;

pub type MemeId = u64;

/// A registry entry together with its share offering.
///
/// Offering parameters and meta hash are written once by `construct` and
/// never change. The duration is the registry's `offeringDuration` at the
/// time of construction.
#[derive(BorshDeserialize, BorshSerialize)]
pub struct Meme {
    pub id: MemeId,
    pub account_id: AccountId,      // owner of the unsold shares
    pub version: u64,
    pub meta_hash: Vec<u8>,
    pub start_price: Balance,       // yoctoNear per share when whitelisted
    pub duration: u64,              // seconds
    pub token: ShareToken,
    pub lifecycle: EntryLifecycle,
    pub is_deposit_transferred: bool,
    pub is_initialized: bool,
}

impl fmt::Display for Meme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ id: {}, creator_id: {}, token_id: {}, start_price: {}, duration: {} }}",
            self.id, self.lifecycle.creator_id, self.token.account_id, self.start_price, self.duration
        )
    }
}

/// Outcome of a settled operation: value to send out and events to log.
/// Applied by the contract only once the whole call succeeded.
#[derive(Debug, Default, PartialEq)]
pub struct Settlement {
    pub payouts: Vec<(AccountId, Balance)>,
    pub events: Vec<EventLog>,
}

impl Settlement {
    pub(crate) fn pay(&mut self, receiver_id: &AccountId, amount: Balance) {
        if amount > 0 {
            self.payouts.push((receiver_id.clone(), amount));
        }
    }

    pub(crate) fn log(&mut self, event: EventLog) {
        self.events.push(event);
    }
}
