use crate::{constants::*, meme::lib::Settlement, *};
use near_sdk::json_types::{U128, U64};

#[cfg(test)]
#[path = "buyer_tests.rs"]
mod buyer_tests;

#[near_bindgen]
impl RegistryContract {
    // purchase at the current Dutch price, provided there's supply left
    #[payable]
    pub fn meme_buy(&mut self, meme_id: U64, amount: U128) {
        let settlement = self
            .internal_buy(
                meme_id.0,
                env::predecessor_account_id(),
                amount.0,
                env::attached_deposit(),
            )
            .unwrap_or_else(|err| err.panic());
        self.internal_settle(settlement);
    }
}

impl RegistryContract {
    pub(crate) fn internal_buy(
        &mut self,
        meme_id: MemeId,
        buyer_id: AccountId,
        amount: Balance,
        attached_deposit: Balance,
    ) -> Result<Settlement, MemeError> {
        self.internal_assert_not_emergency()?;
        let mut meme = self.internal_get_meme(meme_id)?;

        // the buyer may get a new ledger row
        self.internal_assert_storage_deposit(&buyer_id, SHARE_ACCOUNT_STORAGE_MAX)?;
        let storage_before = env::storage_usage();

        let settlement = meme.buy(&buyer_id, amount, attached_deposit, self.internal_now())?;
        self.memes_by_id.insert(&meme_id, &meme);

        self.internal_charge_storage(&buyer_id, storage_before)?;

        log!("{} bought {} shares of meme {}", buyer_id, amount, meme_id);
        Ok(settlement)
    }
}
