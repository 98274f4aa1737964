use crate::*;
use near_contract_standards::fungible_token::FungibleToken;
use near_sdk::IntoStorageKey;

/// Fixed-supply fungible ledger of a single meme.
///
/// Created uninitialized by the activation step; `init` may succeed only
/// once. The whole supply is minted before `finish_minting` and the ledger
/// never changes supply afterwards.
#[derive(BorshDeserialize, BorshSerialize)]
pub struct ShareToken {
    // token handle, the only account allowed to relay transfers through its meme
    pub account_id: AccountId,
    pub name: String,
    pub is_initialized: bool,
    pub is_minting_finished: bool,
    pub ledger: FungibleToken,
}

impl ShareToken {
    pub(crate) fn activate<S: IntoStorageKey>(account_id: AccountId, prefix: S) -> Self {
        ShareToken {
            account_id,
            name: String::new(),
            is_initialized: false,
            is_minting_finished: false,
            ledger: FungibleToken::new(prefix),
        }
    }

    pub(crate) fn init(&mut self, name: &str) -> Result<(), MemeError> {
        if self.is_initialized {
            return Err(MemeError::AlreadyInitialized);
        }
        self.name = name.to_string();
        self.is_initialized = true;
        Ok(())
    }

    pub(crate) fn mint(&mut self, receiver_id: &AccountId, amount: Balance) -> Result<(), MemeError> {
        if self.is_minting_finished {
            return Err(MemeError::MintingFinished);
        }
        self.ledger
            .total_supply
            .checked_add(amount)
            .ok_or_else(|| MemeError::Overflow("share total supply".to_string()))?;
        self.internal_register_if_needed(receiver_id);
        self.ledger.internal_deposit(receiver_id, amount);
        Ok(())
    }

    pub(crate) fn finish_minting(&mut self) {
        self.is_minting_finished = true;
    }

    pub fn total_supply(&self) -> Balance {
        self.ledger.total_supply
    }

    pub fn balance_of(&self, account_id: &AccountId) -> Balance {
        self.ledger.accounts.get(account_id).unwrap_or(0)
    }

    // balance is checked before anything is written so a failed transfer
    // leaves the ledger untouched
    pub(crate) fn transfer(
        &mut self,
        sender_id: &AccountId,
        receiver_id: &AccountId,
        amount: Balance,
    ) -> Result<(), MemeError> {
        if amount == 0 {
            return Err(MemeError::precondition("The amount should be a positive number"));
        }
        if sender_id == receiver_id {
            return Err(MemeError::precondition("Sender and receiver must differ"));
        }
        let available = self.balance_of(sender_id);
        if available < amount {
            return Err(MemeError::InsufficientSupply {
                requested: amount,
                available,
            });
        }
        self.internal_register_if_needed(receiver_id);
        self.ledger.internal_withdraw(sender_id, amount);
        self.ledger.internal_deposit(receiver_id, amount);
        Ok(())
    }

    fn internal_register_if_needed(&mut self, account_id: &AccountId) {
        if !self.ledger.accounts.contains_key(account_id) {
            self.ledger.internal_register_account(account_id);
        }
    }
}
