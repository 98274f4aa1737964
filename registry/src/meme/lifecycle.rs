use crate::*;
use near_sdk::json_types::U64;

// Facts decided by the registry's challenge process. The offering and the
// deposit settlement only read them; the registry owner records them.
#[derive(BorshDeserialize, BorshSerialize, Clone, Debug, PartialEq)]
pub struct EntryLifecycle {
    pub creator_id: AccountId,
    pub deposit: Balance,
    pub whitelisted_on: u64, // seconds since 1970-01-01, 0 if never
    pub was_challenged: bool,
    pub is_blacklisted: bool,
}

impl EntryLifecycle {
    pub fn new(creator_id: AccountId, deposit: Balance) -> Self {
        EntryLifecycle {
            creator_id,
            deposit,
            whitelisted_on: 0,
            was_challenged: false,
            is_blacklisted: false,
        }
    }

    pub fn is_whitelisted(&self) -> bool {
        self.whitelisted_on > 0 && !self.is_blacklisted
    }

    fn assert_pending(&self) -> Result<(), MemeError> {
        if self.whitelisted_on > 0 {
            return Err(MemeError::precondition("Meme is already whitelisted"));
        }
        if self.is_blacklisted {
            return Err(MemeError::precondition("Meme is blacklisted"));
        }
        Ok(())
    }

    pub(crate) fn whitelist(&mut self, now: u64) -> Result<(), MemeError> {
        self.assert_pending()?;
        if now == 0 {
            return Err(MemeError::precondition("Whitelisting date must be after 1970-01-01"));
        }
        self.whitelisted_on = now;
        Ok(())
    }

    // a failed challenge still leaves the meme marked as challenged
    pub(crate) fn record_challenge(&mut self) -> Result<(), MemeError> {
        self.assert_pending()?;
        self.was_challenged = true;
        Ok(())
    }

    pub(crate) fn blacklist(&mut self) -> Result<(), MemeError> {
        self.assert_pending()?;
        self.is_blacklisted = true;
        Ok(())
    }
}

#[near_bindgen]
impl RegistryContract {
    pub fn lifecycle_whitelist(&mut self, meme_id: U64) {
        let now = self.internal_now();
        self.internal_update_lifecycle(meme_id.0, |lifecycle| lifecycle.whitelist(now))
            .unwrap_or_else(|err| err.panic());
    }

    pub fn lifecycle_record_challenge(&mut self, meme_id: U64) {
        self.internal_update_lifecycle(meme_id.0, |lifecycle| lifecycle.record_challenge())
            .unwrap_or_else(|err| err.panic());
    }

    pub fn lifecycle_blacklist(&mut self, meme_id: U64) {
        self.internal_update_lifecycle(meme_id.0, |lifecycle| lifecycle.blacklist())
            .unwrap_or_else(|err| err.panic());
    }
}

impl RegistryContract {
    fn internal_update_lifecycle<F>(&mut self, meme_id: MemeId, update: F) -> Result<(), MemeError>
    where
        F: FnOnce(&mut EntryLifecycle) -> Result<(), MemeError>,
    {
        self.internal_assert_owner()?;
        let mut meme = self.internal_get_meme(meme_id)?;
        update(&mut meme.lifecycle)?;
        self.memes_by_id.insert(&meme_id, &meme);
        log!("Meme {} lifecycle updated", meme_id);
        Ok(())
    }
}
