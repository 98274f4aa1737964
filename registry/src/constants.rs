use crate::*;

// Deposits
pub const MIN_STORAGE_DEPOSIT: Balance = 100_000_000_000_000_000_000_000;     // 0.1 Near

pub const NANOS_PER_SECOND: u64 = 1_000_000_000;

// meme arguments limits, they bound the worst case storage below
pub const MAX_NAME_LEN: usize = 128;
pub const MAX_META_HASH_LEN: usize = 64;

pub const MEME_CREATE_STORAGE_MAX: u64 = 3_000;                     // worst case storage
pub const SHARE_ACCOUNT_STORAGE_MAX: u64 = 300;                     // worst case storage

// default economic parameters, used when the registry is initialized without them
pub const DEFAULT_MAX_START_PRICE: u128 = 1_000_000_000_000_000_000_000_000_000;  // 1000 Near
pub const DEFAULT_MAX_TOTAL_SUPPLY: u128 = 1_000_000_000;
pub const DEFAULT_OFFERING_DURATION: u128 = 60 * 60 * 24 * 7;                     // 1 week, seconds
pub const DEFAULT_DEPOSIT: u128 = 1_000_000_000_000_000_000_000_000;              // 1 Near

// NEP-297 event header
pub const EVENT_STANDARD_NAME: &str = "meme_registry";
pub const EVENT_STANDARD_VERSION: &str = "1.0.0";
