use crate::config::JsonParameters;
use crate::*;
use chrono::{DateTime, TimeZone, Utc};
use near_sdk::{
    json_types::{Base64VecU8, U128, U64},
    test_utils::VMContextBuilder,
    testing_env, VMContext,
};

pub const REGISTRY_ACCOUNT_ID: &str = "registry.memefactory.testnet";
pub const REGISTRY_OWNER_ACCOUNT_ID: &str = "owner.memefactory.testnet";
pub const DEPOSIT_COLLECTOR_ACCOUNT_ID: &str = "collector.memefactory.testnet";
pub const CREATOR_ACCOUNT_ID: &str = "creator.memefactory.testnet";
pub const BUYER_ACCOUNT_ID: &str = "buyer.memefactory.testnet";
pub const MALICIOUS_ACCOUNT_ID: &str = "malicious.memefactory.testnet";
// handles of the first meme created by a fresh registry
pub const MEME_ACCOUNT_ID: &str = "0.meme.registry.memefactory.testnet";
pub const SHARE_TOKEN_ACCOUNT_ID: &str = "0.share.registry.memefactory.testnet";

pub const ONE_NEAR: Balance = 1_000_000_000_000_000_000_000_000;

pub const TEST_MAX_START_PRICE: Balance = 10 * ONE_NEAR;
pub const TEST_MAX_TOTAL_SUPPLY: Balance = 1_000;
pub const TEST_OFFERING_DURATION: u64 = 1_000; // seconds
pub const TEST_DEPOSIT: Balance = ONE_NEAR;

pub fn account(account_id: &str) -> AccountId {
    AccountId::new_unchecked(account_id.to_string())
}

pub fn test_datetime() -> DateTime<Utc> {
    Utc.ymd(1975, 5, 24).and_hms(13, 10, 00)
}

pub fn test_timestamp_seconds(datetime: DateTime<Utc>) -> u64 {
    datetime.timestamp() as u64
}

pub fn test_context_at(
    predecessor_account_id: &str,
    datetime: DateTime<Utc>,
    attached_deposit: Balance,
) -> VMContext {
    VMContextBuilder::new()
        .current_account_id(account(REGISTRY_ACCOUNT_ID))
        .predecessor_account_id(account(predecessor_account_id))
        .signer_account_id(account(predecessor_account_id))
        .block_timestamp(datetime.timestamp_nanos() as u64)
        .attached_deposit(attached_deposit)
        .account_balance(1_000 * ONE_NEAR)
        .build()
}

pub fn test_context(predecessor_account_id: &str, attached_deposit: Balance) -> VMContext {
    test_context_at(predecessor_account_id, test_datetime(), attached_deposit)
}

pub fn test_parameters() -> JsonParameters {
    JsonParameters {
        max_start_price: U128(TEST_MAX_START_PRICE),
        max_total_supply: U128(TEST_MAX_TOTAL_SUPPLY),
        offering_duration: U128(TEST_OFFERING_DURATION as u128),
        deposit: U128(TEST_DEPOSIT),
    }
}

pub fn test_registry() -> RegistryContract {
    testing_env!(test_context(REGISTRY_OWNER_ACCOUNT_ID, 0));
    RegistryContract::new(
        account(REGISTRY_OWNER_ACCOUNT_ID),
        account(DEPOSIT_COLLECTOR_ACCOUNT_ID),
        Some(test_parameters()),
    )
}

pub fn test_storage_deposit(registry: &mut RegistryContract, account_id: &str) {
    testing_env!(test_context(account_id, ONE_NEAR));
    registry.storage_deposit();
}

// creator places storage deposit and creates a meme at test_datetime()
pub fn test_create_meme(
    registry: &mut RegistryContract,
    total_supply: Balance,
    start_price: Balance,
) -> MemeId {
    test_storage_deposit(registry, CREATOR_ACCOUNT_ID);
    testing_env!(test_context(CREATOR_ACCOUNT_ID, TEST_DEPOSIT));
    registry
        .meme_create(
            U64(1),
            String::from("Bored Grapes"),
            Base64VecU8(vec![0x12, 0x20, 0xab, 0xcd]),
            U128(total_supply),
            U128(start_price),
        )
        .0
}

pub fn test_whitelist(registry: &mut RegistryContract, meme_id: MemeId, datetime: DateTime<Utc>) {
    testing_env!(test_context_at(REGISTRY_OWNER_ACCOUNT_ID, datetime, 0));
    registry.lifecycle_whitelist(U64(meme_id));
}
