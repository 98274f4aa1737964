use crate::{meme::lib::Settlement, *};
use near_sdk::json_types::U64;

#[cfg(test)]
#[path = "settlement_tests.rs"]
mod settlement_tests;

#[near_bindgen]
impl RegistryContract {
    // Releases the deposit of an unchallenged, whitelisted meme to the
    // deposit collector. Anyone may trigger it, it succeeds once.
    pub fn meme_transfer_deposit(&mut self, meme_id: U64) {
        let settlement = self
            .internal_transfer_deposit(meme_id.0)
            .unwrap_or_else(|err| err.panic());
        self.internal_settle(settlement);
    }
}

impl RegistryContract {
    pub(crate) fn internal_transfer_deposit(&mut self, meme_id: MemeId) -> Result<Settlement, MemeError> {
        self.internal_assert_not_emergency()?;
        let mut meme = self.internal_get_meme(meme_id)?;
        let settlement = meme.transfer_deposit(&self.deposit_collector_id)?;
        self.memes_by_id.insert(&meme_id, &meme);
        Ok(settlement)
    }
}
