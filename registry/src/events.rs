use crate::{constants::*, *};
use near_sdk::json_types::{U128, U64};
use std::fmt;

/// Enum that represents the data type of the EventLog.
/// The enum can either be a deposit release, a share movement or a purchase.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "event", content = "data")]
#[serde(rename_all = "snake_case")]
#[serde(crate = "near_sdk::serde")]
pub enum EventLogVariant {
    DepositTransferred(DepositTransferredLog),
    MemeTokenTransfer(MemeTokenTransferLog),
    Buy(BuyLog),
}

/// Interface to capture data about an event
///
/// Arguments:
/// * `standard`: name of standard e.g. meme_registry
/// * `version`: e.g. 1.0.0
/// * `event`: associate event data
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct EventLog {
    pub standard: String,
    pub version: String,

    // `flatten` to not have "event": {<EventLogVariant>} in the JSON, just have the contents of {<EventLogVariant>}.
    #[serde(flatten)]
    pub event: EventLogVariant,
}

impl EventLog {
    pub(crate) fn new(event: EventLogVariant) -> Self {
        EventLog {
            standard: EVENT_STANDARD_NAME.to_string(),
            version: EVENT_STANDARD_VERSION.to_string(),
            event,
        }
    }

    pub(crate) fn emit(&self) {
        env::log_str(&self.to_string());
    }
}

impl fmt::Display for EventLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!(
            "EVENT_JSON:{}",
            &near_sdk::serde_json::to_string(self).map_err(|_| fmt::Error)?
        ))
    }
}

// `version` below is the meme version given at creation, not the event standard version

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct DepositTransferredLog {
    pub meme_id: U64,
    pub version: U64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct MemeTokenTransferLog {
    pub meme_id: U64,
    pub version: U64,
    pub from: AccountId,
    pub to: AccountId,
    pub value: U128,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct BuyLog {
    pub meme_id: U64,
    pub version: U64,
    pub buyer: AccountId,
    pub price: U128,
    pub amount: U128,
}
