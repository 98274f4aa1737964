use crate::{constants::*, meme::lib::Settlement, *};

// used to generate a unique prefix in our storage collections (this is to avoid data collisions)
pub(crate) fn hash_account_id(account_id: &AccountId) -> CryptoHash {
    //get the default hash
    let mut hash = CryptoHash::default();
    //we hash the account ID and return it
    hash.copy_from_slice(&env::sha256(account_id.as_bytes()));
    hash
}

impl RegistryContract {
    // doesn't check if already there!
    pub(crate) fn internal_add_meme(&mut self, meme: &Meme) {
        self.memes_by_id.insert(&meme.id, meme);
        self.internal_add_meme_to_creator(&meme.lifecycle.creator_id, &meme.id);
    }

    // add meme to the set of memes a creator submitted
    // doesn't check if already there
    pub(crate) fn internal_add_meme_to_creator(&mut self, creator_id: &AccountId, meme_id: &MemeId) {
        //get the set of memes for the given creator
        let mut meme_set = self.memes_by_creator_id.get(creator_id).unwrap_or_else(|| {
            //if the creator doesn't have any memes yet we'll create the new unordered set
            UnorderedSet::new(RegistryStorageKey::MemesByCreatorIdInner {
                account_id_hash: hash_account_id(creator_id), // generate a new unique prefix for the collection
            })
        });

        meme_set.insert(meme_id);

        // insert back
        self.memes_by_creator_id.insert(creator_id, &meme_set);
    }

    pub(crate) fn internal_get_meme(&self, meme_id: MemeId) -> Result<Meme, MemeError> {
        self.memes_by_id
            .get(&meme_id)
            .ok_or(MemeError::MemeNotFound(meme_id))
    }

    // block time in whole seconds, the unit of whitelisting dates and offering durations
    pub(crate) fn internal_now(&self) -> u64 {
        env::block_timestamp() / NANOS_PER_SECOND
    }

    pub(crate) fn internal_assert_owner(&self) -> Result<(), MemeError> {
        if env::predecessor_account_id() != self.owner_id {
            return Err(MemeError::Unauthorized(
                "Only the registry owner can call this method".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn internal_assert_not_emergency(&self) -> Result<(), MemeError> {
        if self.is_emergency {
            return Err(MemeError::EmergencyHalt);
        }
        Ok(())
    }

    // Is deposit sufficient to cover the storage in the worst-case scenario?
    pub(crate) fn internal_assert_storage_deposit(
        &self,
        account_id: &AccountId,
        worst_case_storage: u64,
    ) -> Result<(), MemeError> {
        let required = worst_case_storage as Balance * env::storage_byte_cost();
        let available = self.storage_deposits.get(account_id).unwrap_or(0);
        if available < required {
            return Err(MemeError::InsufficientStorageDeposit {
                required,
                available,
            });
        }
        Ok(())
    }

    // charges the storage added since storage_before to the account's storage deposit
    pub(crate) fn internal_charge_storage(
        &mut self,
        account_id: &AccountId,
        storage_before: u64,
    ) -> Result<Balance, MemeError> {
        let storage_added = env::storage_usage().saturating_sub(storage_before);
        let storage_cost = storage_added as Balance * env::storage_byte_cost();
        let current_deposit = self.storage_deposits.get(account_id).unwrap_or(0);
        if current_deposit < storage_cost {
            return Err(MemeError::InsufficientStorageDeposit {
                required: storage_cost,
                available: current_deposit,
            });
        }
        let updated_deposit = current_deposit - storage_cost;
        if storage_cost > 0 {
            self.storage_deposits.insert(account_id, &updated_deposit);
            log!("Storage of {} bytes charged to {}", storage_added, account_id);
        }
        Ok(updated_deposit)
    }

    // Runs only after all bookkeeping of the call is done. Transfers are
    // receipts executed once this call commits, so nothing leaves the
    // contract if the call panics.
    pub(crate) fn internal_settle(&self, settlement: Settlement) {
        for (receiver_id, amount) in settlement.payouts {
            Promise::new(receiver_id).transfer(amount);
        }
        for event in settlement.events.iter() {
            event.emit();
        }
    }
}
