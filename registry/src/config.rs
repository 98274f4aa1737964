use crate::{constants::*, *};
use near_sdk::{json_types::U128, IntoStorageKey};

// parameter store keys
pub const MAX_START_PRICE_KEY: &str = "maxStartPrice";
pub const MAX_TOTAL_SUPPLY_KEY: &str = "maxTotalSupply";
pub const OFFERING_DURATION_KEY: &str = "offeringDuration";
pub const DEPOSIT_KEY: &str = "deposit";

const PARAMETER_KEYS: [&str; 4] = [
    MAX_START_PRICE_KEY,
    MAX_TOTAL_SUPPLY_KEY,
    OFFERING_DURATION_KEY,
    DEPOSIT_KEY,
];

/// Economic constants shared by all memes of the registry.
///
/// Values are read live whenever a meme is created. Only the offering
/// duration is copied into the meme, later edits never reach existing memes.
#[derive(BorshDeserialize, BorshSerialize)]
pub struct ParameterStore {
    values: LookupMap<String, u128>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "near_sdk::serde")]
#[serde(rename_all = "camelCase")]
pub struct JsonParameters {
    pub max_start_price: U128,
    pub max_total_supply: U128,
    pub offering_duration: U128, // seconds
    pub deposit: U128,
}

impl Default for JsonParameters {
    fn default() -> Self {
        JsonParameters {
            max_start_price: U128(DEFAULT_MAX_START_PRICE),
            max_total_supply: U128(DEFAULT_MAX_TOTAL_SUPPLY),
            offering_duration: U128(DEFAULT_OFFERING_DURATION),
            deposit: U128(DEFAULT_DEPOSIT),
        }
    }
}

impl ParameterStore {
    pub(crate) fn new<S: IntoStorageKey>(prefix: S) -> Self {
        ParameterStore {
            values: LookupMap::new(prefix),
        }
    }

    pub(crate) fn load(&mut self, parameters: JsonParameters) {
        self.values.insert(&MAX_START_PRICE_KEY.to_string(), &parameters.max_start_price.0);
        self.values.insert(&MAX_TOTAL_SUPPLY_KEY.to_string(), &parameters.max_total_supply.0);
        self.values.insert(&OFFERING_DURATION_KEY.to_string(), &parameters.offering_duration.0);
        self.values.insert(&DEPOSIT_KEY.to_string(), &parameters.deposit.0);
    }

    // missing keys read as 0, same as an unset slot
    pub(crate) fn get(&self, key: &str) -> u128 {
        self.values.get(&key.to_string()).unwrap_or(0)
    }

    pub(crate) fn set(&mut self, key: &str, value: u128) -> Result<(), MemeError> {
        if !PARAMETER_KEYS.contains(&key) {
            return Err(MemeError::PreconditionViolation(format!(
                "Unknown parameter {}",
                key
            )));
        }
        self.values.insert(&key.to_string(), &value);
        Ok(())
    }

    pub(crate) fn max_start_price(&self) -> Balance {
        self.get(MAX_START_PRICE_KEY)
    }

    pub(crate) fn max_total_supply(&self) -> Balance {
        self.get(MAX_TOTAL_SUPPLY_KEY)
    }

    pub(crate) fn deposit(&self) -> Balance {
        self.get(DEPOSIT_KEY)
    }

    pub(crate) fn offering_duration(&self) -> Result<u64, MemeError> {
        u64::try_from(self.get(OFFERING_DURATION_KEY))
            .map_err(|_| MemeError::Overflow("offering duration does not fit in u64".to_string()))
    }

    pub(crate) fn to_json(&self) -> JsonParameters {
        JsonParameters {
            max_start_price: U128(self.max_start_price()),
            max_total_supply: U128(self.max_total_supply()),
            offering_duration: U128(self.get(OFFERING_DURATION_KEY)),
            deposit: U128(self.deposit()),
        }
    }
}
