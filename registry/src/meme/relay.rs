use crate::{constants::*, events::EventLog, *};
use near_sdk::json_types::{U128, U64};

#[cfg(test)]
#[path = "relay_tests.rs"]
mod relay_tests;

#[near_bindgen]
impl RegistryContract {
    // share tokens report their transfers here so that indexers follow a single
    // event stream per meme; only the meme's own token handle is heard.
    // Token handles are never created on chain, share movements reach the
    // relay internally through Meme::internal_transfer_shares.
    pub fn meme_token_transfer(&mut self, meme_id: U64, from: AccountId, to: AccountId, value: U128) {
        self.internal_get_meme(meme_id.0)
            .and_then(|meme| {
                meme.relay_token_transfer(&env::predecessor_account_id(), &from, &to, value.0)
            })
            .unwrap_or_else(|err| err.panic())
            .emit();
    }

    // holder to holder transfer, the receiver's ledger row is paid by the sender
    pub fn share_transfer(&mut self, meme_id: U64, receiver_id: AccountId, amount: U128) {
        self.internal_share_transfer(meme_id.0, env::predecessor_account_id(), receiver_id, amount.0)
            .unwrap_or_else(|err| err.panic())
            .emit();
    }
}

impl RegistryContract {
    fn internal_share_transfer(
        &mut self,
        meme_id: MemeId,
        sender_id: AccountId,
        receiver_id: AccountId,
        amount: Balance,
    ) -> Result<EventLog, MemeError> {
        let mut meme = self.internal_get_meme(meme_id)?;
        self.internal_assert_storage_deposit(&sender_id, SHARE_ACCOUNT_STORAGE_MAX)?;
        let storage_before = env::storage_usage();

        let transfer_log = meme.internal_transfer_shares(&sender_id, &receiver_id, amount)?;
        self.memes_by_id.insert(&meme_id, &meme);

        self.internal_charge_storage(&sender_id, storage_before)?;
        Ok(transfer_log)
    }
}
