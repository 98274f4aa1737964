use crate::{constants::MIN_STORAGE_DEPOSIT, *};
use near_sdk::json_types::U128;

// Storage deposits pay for the contract state an account adds (memes it
// creates, share balances it opens). They are unrelated to the meme deposit
// held by the lifecycle.

#[near_bindgen]
impl RegistryContract {
    // first deposit of an account must be at least MIN_STORAGE_DEPOSIT, the
    // deposit record pays for itself
    #[payable]
    pub fn storage_deposit(&mut self) -> U128 {
        self.internal_storage_deposit(env::predecessor_account_id(), env::attached_deposit())
            .map(U128)
            .unwrap_or_else(|err| err.panic())
    }

    pub fn storage_withdraw(&mut self, amount_yocto: U128) -> Promise {
        let account_id = env::predecessor_account_id();
        let current_deposit = self.storage_deposits.get(&account_id).unwrap_or(0);
        if amount_yocto.0 > current_deposit {
            MemeError::PreconditionViolation(format!(
                "Withdrawn amount exceeds your current deposit of {}",
                current_deposit
            ))
            .panic()
        }
        self.storage_deposits
            .insert(&account_id, &(current_deposit - amount_yocto.0));
        Promise::new(account_id).transfer(amount_yocto.0)
    }

    pub fn storage_balance_of(&self, account_id: AccountId) -> (U128, bool) {
        match self.storage_deposits.get(&account_id) {
            Some(current_deposit) => (U128(current_deposit), true),
            None => (U128(0), false),
        }
    }
}

impl RegistryContract {
    fn internal_storage_deposit(
        &mut self,
        account_id: AccountId,
        amount: Balance,
    ) -> Result<Balance, MemeError> {
        let current_deposit = self.storage_deposits.get(&account_id);
        let is_new = current_deposit.is_none();
        let current_deposit = current_deposit.unwrap_or(0);
        let updated_deposit = current_deposit
            .checked_add(amount)
            .ok_or_else(|| MemeError::Overflow("storage deposit".to_string()))?;
        if updated_deposit < MIN_STORAGE_DEPOSIT {
            return Err(MemeError::PreconditionViolation(format!(
                "Please deposit at least {}",
                MIN_STORAGE_DEPOSIT - current_deposit
            )));
        }

        let storage_before = env::storage_usage();
        self.storage_deposits.insert(&account_id, &updated_deposit);
        if is_new {
            log!("Storage deposit record created for {}", account_id);
        }
        self.internal_charge_storage(&account_id, storage_before)
    }
}

#[cfg(test)]
mod tests {
    use crate::{constants::MIN_STORAGE_DEPOSIT, test_utils::*};
    use near_sdk::{json_types::U128, testing_env};

    #[test]
    fn test_deposit_and_withdraw() {
        let mut registry = test_registry();
        test_storage_deposit(&mut registry, BUYER_ACCOUNT_ID);

        let (balance, exists) = registry.storage_balance_of(account(BUYER_ACCOUNT_ID));
        assert!(exists);
        // the record itself was paid from the deposit
        assert!(balance.0 < ONE_NEAR);
        assert!(balance.0 > ONE_NEAR / 2);

        testing_env!(test_context(BUYER_ACCOUNT_ID, 0));
        registry.storage_withdraw(U128(balance.0 / 2));
        let (after, _) = registry.storage_balance_of(account(BUYER_ACCOUNT_ID));
        assert_eq!(after.0, balance.0 - balance.0 / 2);
    }

    #[test]
    fn test_unknown_account() {
        let registry = test_registry();
        assert_eq!(
            registry.storage_balance_of(account(MALICIOUS_ACCOUNT_ID)),
            (U128(0), false)
        );
    }

    #[test]
    #[should_panic(expected = r#"Please deposit at least"#)]
    fn test_first_deposit_too_low() {
        let mut registry = test_registry();
        testing_env!(test_context(BUYER_ACCOUNT_ID, MIN_STORAGE_DEPOSIT - 1));
        registry.storage_deposit();
    }

    #[test]
    #[should_panic(expected = r#"Withdrawn amount exceeds your current deposit"#)]
    fn test_withdraw_too_much() {
        let mut registry = test_registry();
        test_storage_deposit(&mut registry, BUYER_ACCOUNT_ID);
        testing_env!(test_context(BUYER_ACCOUNT_ID, 0));
        registry.storage_withdraw(U128(ONE_NEAR));
    }
}
