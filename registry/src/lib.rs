use near_sdk::{
    env, log, near_bindgen, AccountId, Balance, PanicOnDefault,
    Promise, CryptoHash, BorshStorageKey,
    collections::{LookupMap, UnorderedMap, UnorderedSet},
    serde::{Deserialize, Serialize},
    borsh::{self, BorshDeserialize, BorshSerialize},
};
use config::{JsonParameters, ParameterStore};
use error::MemeError;
use meme::lib::{Meme, MemeId};

mod activation;
mod config;
mod constants;
mod deposit;
mod error;
mod events;
mod internal;
mod meme;
mod share_token;

#[cfg(test)]
mod test_utils;

//main contract struct to store all the information
#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct RegistryContract {
    pub owner_id: AccountId,
    // receives the deposits of memes that made it to the registry unchallenged
    pub deposit_collector_id: AccountId,
    pub parameters: ParameterStore,
    pub is_emergency: bool,
    pub memes_by_id: UnorderedMap<MemeId, Meme>,
    pub memes_by_creator_id: LookupMap<AccountId, UnorderedSet<MemeId>>,
    pub storage_deposits: LookupMap<AccountId, Balance>,
    pub next_meme_id: MemeId,
}

/// Helper structure to for keys of the persistent collections.
#[derive(BorshStorageKey, BorshSerialize)]
pub enum RegistryStorageKey {
    Parameters,
    MemesById,
    MemesByCreatorId,
    MemesByCreatorIdInner { account_id_hash: CryptoHash },
    StorageDeposits,
    ShareAccounts { meme_id: MemeId },
}

#[near_bindgen]
impl RegistryContract {
    /*
        initialization function (can only be called once).
        owner acts as the registry authority: it edits parameters, drives
        the meme lifecycle and may engage the emergency halt
    */
    #[init]
    pub fn new(
        owner_id: AccountId,
        deposit_collector_id: AccountId,
        parameters: Option<JsonParameters>,
    ) -> Self {
        assert!(!env::state_exists(), "Already initialized");
        let mut this = Self {
            owner_id,
            deposit_collector_id,
            parameters: ParameterStore::new(RegistryStorageKey::Parameters),
            is_emergency: false,
            memes_by_id: UnorderedMap::new(RegistryStorageKey::MemesById),
            memes_by_creator_id: LookupMap::new(RegistryStorageKey::MemesByCreatorId),
            storage_deposits: LookupMap::new(RegistryStorageKey::StorageDeposits),
            next_meme_id: 0,
        };
        this.parameters.load(parameters.unwrap_or_default());
        this
    }

    pub fn registry_set_parameter(&mut self, key: String, value: near_sdk::json_types::U128) {
        self.internal_assert_owner()
            .and_then(|_| self.parameters.set(&key, value.0))
            .unwrap_or_else(|err| err.panic());
        log!("Parameter {} set to {}", key, value.0);
    }

    pub fn registry_parameters(&self) -> JsonParameters {
        self.parameters.to_json()
    }

    pub fn registry_set_emergency(&mut self, is_emergency: bool) {
        self.internal_assert_owner().unwrap_or_else(|err| err.panic());
        self.is_emergency = is_emergency;
        log!("Emergency halt {}", if is_emergency { "engaged" } else { "released" });
    }

    pub fn registry_is_emergency(&self) -> bool {
        self.is_emergency
    }
}
