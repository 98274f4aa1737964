use crate::{constants::*, *};
use near_sdk::json_types::{Base64VecU8, U128, U64};

#[cfg(test)]
#[path = "creator_tests.rs"]
mod creator_tests;

#[near_bindgen]
impl RegistryContract {
    // Submits a meme: the attached value must cover the registry's deposit
    // parameter, anything above it goes back to the creator. Storage is paid
    // from the creator's storage deposit.
    #[payable]
    pub fn meme_create(
        &mut self,
        version: U64,
        name: String,
        meta_hash: Base64VecU8,
        total_supply: U128,
        start_price: U128,
    ) -> U64 {
        self.internal_create_meme(
            env::predecessor_account_id(),
            env::attached_deposit(),
            version.0,
            &name,
            meta_hash.0,
            total_supply.0,
            start_price.0,
        )
        .map(U64)
        .unwrap_or_else(|err| err.panic())
    }
}

impl RegistryContract {
    pub(crate) fn internal_create_meme(
        &mut self,
        creator_id: AccountId,
        attached_deposit: Balance,
        version: u64,
        name: &str,
        meta_hash: Vec<u8>,
        total_supply: Balance,
        start_price: Balance,
    ) -> Result<MemeId, MemeError> {
        self.internal_assert_not_emergency()?;

        let deposit = self.parameters.deposit();
        if attached_deposit < deposit {
            return Err(MemeError::InsufficientPayment {
                paid: attached_deposit,
                price: deposit,
            });
        }

        self.internal_assert_storage_deposit(&creator_id, MEME_CREATE_STORAGE_MAX)?;
        let storage_before = env::storage_usage();

        let mut meme = self.internal_activate_meme();
        meme.construct(
            creator_id.clone(),
            deposit,
            version,
            name,
            meta_hash,
            total_supply,
            start_price,
            &self.parameters,
        )?;
        self.internal_add_meme(&meme);

        self.internal_charge_storage(&creator_id, storage_before)?;

        let surplus_deposit = attached_deposit - deposit;
        if surplus_deposit > 0 {
            Promise::new(creator_id).transfer(surplus_deposit);
        }

        log!("Meme created: {}", meme);
        Ok(meme.id)
    }
}
