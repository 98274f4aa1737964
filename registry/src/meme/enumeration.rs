use crate::*;
use chrono::{TimeZone, Utc};
use near_sdk::json_types::{Base64VecU8, U128, U64};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct JsonMeme {
    pub meme_id: U64,
    pub start_price: U128,
    pub duration: U64, // seconds
    pub token_id: AccountId,
    pub total_supply: U128,
    pub unsold_balance: U128,
    pub meta_hash: Base64VecU8,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct JsonMemeLifecycle {
    pub meme_id: U64,
    pub creator_id: AccountId,
    pub deposit: U128,
    pub whitelisted_on: Option<String>, // RFC 3339
    pub is_whitelisted: bool,
    pub was_challenged: bool,
    pub is_blacklisted: bool,
    pub is_deposit_transferred: bool,
}

impl From<&Meme> for JsonMeme {
    fn from(meme: &Meme) -> Self {
        JsonMeme {
            meme_id: U64(meme.id),
            start_price: U128(meme.start_price),
            duration: U64(meme.duration),
            token_id: meme.token.account_id.clone(),
            total_supply: U128(meme.token.total_supply()),
            unsold_balance: U128(meme.unsold_balance()),
            meta_hash: Base64VecU8(meme.meta_hash.clone()),
        }
    }
}

#[near_bindgen]
impl RegistryContract {
    pub fn meme_load(&self, meme_id: U64) -> JsonMeme {
        self.internal_get_meme(meme_id.0)
            .map(|meme| JsonMeme::from(&meme))
            .unwrap_or_else(|err| err.panic())
    }

    // Query for memes from all creators, results are paginated
    pub fn memes(&self, from_index: Option<U128>, limit: Option<u64>) -> Vec<JsonMeme> {
        //where to start pagination - if we have a from_index, we'll use that - otherwise start from 0 index
        let start = u128::from(from_index.unwrap_or(U128(0))) as usize;
        let count = limit.unwrap_or(10) as usize;

        self.memes_by_id
            .values()
            .skip(start)
            .take(count)
            .map(|meme| JsonMeme::from(&meme))
            .collect()
    }

    // get memes submitted by given creator, results are paginated
    pub fn memes_by_creator(
        &self,
        creator_id: AccountId,
        from_index: Option<U128>,
        limit: Option<u64>,
    ) -> Vec<JsonMeme> {
        let meme_ids = match self.memes_by_creator_id.get(&creator_id) {
            Some(meme_ids) => meme_ids,
            None => return vec![],
        };

        let start = u128::from(from_index.unwrap_or(U128(0))) as usize;
        let count = limit.unwrap_or(10) as usize;

        meme_ids
            .iter()
            .skip(start)
            .take(count)
            .filter_map(|meme_id| self.memes_by_id.get(&meme_id))
            .map(|meme| JsonMeme::from(&meme))
            .collect()
    }

    pub fn meme_current_price(&self, meme_id: U64) -> U128 {
        let now = self.internal_now();
        self.internal_get_meme(meme_id.0)
            .map(|meme| U128(meme.current_price(now)))
            .unwrap_or_else(|err| err.panic())
    }

    pub fn meme_lifecycle(&self, meme_id: U64) -> JsonMemeLifecycle {
        let meme = self
            .internal_get_meme(meme_id.0)
            .unwrap_or_else(|err| err.panic());
        let lifecycle = &meme.lifecycle;
        let whitelisted_on = match lifecycle.whitelisted_on {
            0 => None,
            seconds => Some(Utc.timestamp(seconds as i64, 0).to_rfc3339()),
        };
        JsonMemeLifecycle {
            meme_id,
            creator_id: lifecycle.creator_id.clone(),
            deposit: U128(lifecycle.deposit),
            whitelisted_on,
            is_whitelisted: lifecycle.is_whitelisted(),
            was_challenged: lifecycle.was_challenged,
            is_blacklisted: lifecycle.is_blacklisted,
            is_deposit_transferred: meme.is_deposit_transferred,
        }
    }

    // 0 for accounts that never held shares of the meme
    pub fn share_balance_of(&self, meme_id: U64, account_id: AccountId) -> U128 {
        self.internal_get_meme(meme_id.0)
            .map(|meme| U128(meme.token.balance_of(&account_id)))
            .unwrap_or_else(|err| err.panic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use near_sdk::testing_env;

    #[test]
    fn test_meme_load() {
        let mut registry = test_registry();
        let meme_id = test_create_meme(&mut registry, 100, ONE_NEAR);
        assert_eq!(
            registry.meme_load(U64(meme_id)),
            JsonMeme {
                meme_id: U64(0),
                start_price: U128(ONE_NEAR),
                duration: U64(TEST_OFFERING_DURATION),
                token_id: account(SHARE_TOKEN_ACCOUNT_ID),
                total_supply: U128(100),
                unsold_balance: U128(100),
                meta_hash: Base64VecU8(vec![0x12, 0x20, 0xab, 0xcd]),
            }
        );
    }

    #[test]
    #[should_panic(expected = r#"E11: Could not find meme 0"#)]
    fn test_meme_load_unknown() {
        let registry = test_registry();
        registry.meme_load(U64(0));
    }

    #[test]
    fn test_pagination() {
        let mut registry = test_registry();
        for _ in 0..5 {
            test_create_meme(&mut registry, 10, 1);
        }
        let all = registry.memes(None, None);
        assert_eq!(all.len(), 5);
        let page = registry.memes(Some(U128(1)), Some(2));
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].meme_id, U64(1));
        assert_eq!(page[1].meme_id, U64(2));
        assert!(registry.memes(Some(U128(5)), None).is_empty());

        let by_creator = registry.memes_by_creator(account(CREATOR_ACCOUNT_ID), Some(U128(3)), Some(10));
        assert_eq!(by_creator.len(), 2);
        assert!(registry.memes_by_creator(account(BUYER_ACCOUNT_ID), None, None).is_empty());
    }

    #[test]
    fn test_current_price_view() {
        let mut registry = test_registry();
        let meme_id = test_create_meme(&mut registry, 10, 1_000);
        test_whitelist(&mut registry, meme_id, test_datetime());

        testing_env!(test_context(BUYER_ACCOUNT_ID, 0));
        assert_eq!(registry.meme_current_price(U64(meme_id)), U128(1_000));

        let later = test_datetime() + chrono::Duration::seconds(250);
        testing_env!(test_context_at(BUYER_ACCOUNT_ID, later, 0));
        assert_eq!(registry.meme_current_price(U64(meme_id)), U128(750));
    }

    #[test]
    fn test_lifecycle_view() {
        let mut registry = test_registry();
        let meme_id = test_create_meme(&mut registry, 10, 1);
        let pending = registry.meme_lifecycle(U64(meme_id));
        assert_eq!(pending.whitelisted_on, None);
        assert!(!pending.is_whitelisted);
        assert_eq!(pending.deposit, U128(TEST_DEPOSIT));

        test_whitelist(&mut registry, meme_id, test_datetime());
        let whitelisted = registry.meme_lifecycle(U64(meme_id));
        assert_eq!(whitelisted.whitelisted_on, Some(String::from("1975-05-24T13:10:00+00:00")));
        assert!(whitelisted.is_whitelisted);
        assert!(!whitelisted.is_deposit_transferred);
    }

    #[test]
    fn test_share_balance_of() {
        let mut registry = test_registry();
        let meme_id = test_create_meme(&mut registry, 10, 1);
        assert_eq!(registry.share_balance_of(U64(meme_id), account(MEME_ACCOUNT_ID)), U128(10));
        assert_eq!(registry.share_balance_of(U64(meme_id), account(BUYER_ACCOUNT_ID)), U128(0));
    }
}
