use crate::{
    config::ParameterStore,
    constants::*,
    events::*,
    meme::{lib::Settlement, lifecycle::EntryLifecycle},
    share_token::ShareToken,
    *,
};
use near_sdk::json_types::{U128, U64};

// This is required so that the unit tests (placed in separate file) see this
#[cfg(test)]
#[path = "internal_tests.rs"]
mod internal_tests;

impl Meme {
    // inert until construct succeeds; the lifecycle points at the meme itself until then
    pub(crate) fn activate(id: MemeId, account_id: AccountId, token: ShareToken) -> Self {
        Meme {
            id,
            lifecycle: EntryLifecycle::new(account_id.clone(), 0),
            account_id,
            version: 0,
            meta_hash: vec![],
            start_price: 0,
            duration: 0,
            token,
            is_deposit_transferred: false,
            is_initialized: false,
        }
    }

    // Validates everything before writing anything, then mints the whole
    // supply to the meme account and closes minting for good.
    pub(crate) fn construct(
        &mut self,
        creator_id: AccountId,
        deposit: Balance,
        version: u64,
        name: &str,
        meta_hash: Vec<u8>,
        total_supply: Balance,
        start_price: Balance,
        parameters: &ParameterStore,
    ) -> Result<(), MemeError> {
        if self.is_initialized || self.token.is_initialized {
            return Err(MemeError::AlreadyInitialized);
        }

        let max_total_supply = parameters.max_total_supply();
        if total_supply == 0 || total_supply > max_total_supply {
            return Err(MemeError::PreconditionViolation(format!(
                "Total supply must be between 1 and {}",
                max_total_supply
            )));
        }

        let max_start_price = parameters.max_start_price();
        if start_price > max_start_price {
            return Err(MemeError::PreconditionViolation(format!(
                "Start price cannot exceed {}",
                max_start_price
            )));
        }

        if name.is_empty() || name.len() > MAX_NAME_LEN {
            return Err(MemeError::PreconditionViolation(format!(
                "Name length must be between 1 and {} characters",
                MAX_NAME_LEN
            )));
        }

        if meta_hash.len() > MAX_META_HASH_LEN {
            return Err(MemeError::PreconditionViolation(format!(
                "Meta hash cannot exceed {} bytes",
                MAX_META_HASH_LEN
            )));
        }

        let duration = parameters.offering_duration()?;

        self.token.init(name)?;
        let account_id = self.account_id.clone();
        self.token.mint(&account_id, total_supply)?;
        self.token.finish_minting();

        self.lifecycle = EntryLifecycle::new(creator_id, deposit);
        self.version = version;
        self.meta_hash = meta_hash;
        self.start_price = start_price;
        self.duration = duration;
        self.is_initialized = true;
        Ok(())
    }

    pub fn unsold_balance(&self) -> Balance {
        self.token.balance_of(&self.account_id)
    }

    // Checks and bookkeeping happen here, value only moves later through
    // the returned settlement (creator first, then the buyer's change).
    pub(crate) fn buy(
        &mut self,
        buyer_id: &AccountId,
        amount: Balance,
        attached_deposit: Balance,
        now: u64,
    ) -> Result<Settlement, MemeError> {
        if !self.lifecycle.is_whitelisted() {
            return Err(MemeError::NotWhitelisted(self.id));
        }
        if amount == 0 {
            return Err(MemeError::precondition("Amount must be greater than 0"));
        }

        let price = self
            .current_price(now)
            .checked_mul(amount)
            .ok_or_else(|| MemeError::Overflow("price times amount".to_string()))?;
        if attached_deposit < price {
            return Err(MemeError::InsufficientPayment {
                paid: attached_deposit,
                price,
            });
        }

        let meme_account_id = self.account_id.clone();
        let transfer_log = self.internal_transfer_shares(&meme_account_id, buyer_id, amount)?;

        let mut settlement = Settlement::default();
        settlement.pay(&self.lifecycle.creator_id, price);
        settlement.pay(buyer_id, attached_deposit - price);
        settlement.log(transfer_log);
        settlement.log(EventLog::new(EventLogVariant::Buy(BuyLog {
            meme_id: U64(self.id),
            version: U64(self.version),
            buyer: buyer_id.clone(),
            price: U128(price),
            amount: U128(amount),
        })));
        Ok(settlement)
    }

    pub(crate) fn transfer_deposit(&mut self, collector_id: &AccountId) -> Result<Settlement, MemeError> {
        if !self.lifecycle.is_whitelisted() {
            return Err(MemeError::NotWhitelisted(self.id));
        }
        if self.lifecycle.was_challenged {
            return Err(MemeError::AlreadyChallenged);
        }
        if self.is_deposit_transferred {
            return Err(MemeError::DepositAlreadyTransferred(self.id));
        }

        self.is_deposit_transferred = true;

        let mut settlement = Settlement::default();
        settlement.pay(collector_id, self.lifecycle.deposit);
        settlement.log(EventLog::new(EventLogVariant::DepositTransferred(
            DepositTransferredLog {
                meme_id: U64(self.id),
                version: U64(self.version),
            },
        )));
        Ok(settlement)
    }

    // only the meme's own share token gets its transfers relayed
    pub(crate) fn relay_token_transfer(
        &self,
        caller_id: &AccountId,
        from: &AccountId,
        to: &AccountId,
        value: Balance,
    ) -> Result<EventLog, MemeError> {
        if caller_id != &self.token.account_id {
            return Err(MemeError::Unauthorized(format!(
                "Only {} can relay share transfers of meme {}",
                self.token.account_id, self.id
            )));
        }
        Ok(EventLog::new(EventLogVariant::MemeTokenTransfer(
            MemeTokenTransferLog {
                meme_id: U64(self.id),
                version: U64(self.version),
                from: from.clone(),
                to: to.clone(),
                value: U128(value),
            },
        )))
    }

    // moves shares on the ledger, then reports the move through the relay as the token
    pub(crate) fn internal_transfer_shares(
        &mut self,
        sender_id: &AccountId,
        receiver_id: &AccountId,
        amount: Balance,
    ) -> Result<EventLog, MemeError> {
        self.token.transfer(sender_id, receiver_id, amount)?;
        let token_id = self.token.account_id.clone();
        self.relay_token_transfer(&token_id, sender_id, receiver_id, amount)
    }
}
