use crate::*;
use thiserror::Error;

// Every failure aborts the whole contract call. Core methods return
// Result<_, MemeError>, the contract boundary turns the error into a panic
// so that the receipt is rolled back together with the attached deposit.
#[derive(Error, Debug, PartialEq)]
pub enum MemeError {
    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Attached deposit of {paid} is insufficient to pay the price of {price}")]
    InsufficientPayment { paid: Balance, price: Balance },

    #[error("Insufficient supply: requested {requested}, available {available}")]
    InsufficientSupply { requested: Balance, available: Balance },

    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    #[error("Meme was challenged, its deposit cannot be transferred")]
    AlreadyChallenged,

    #[error("Registry is under emergency halt")]
    EmergencyHalt,

    #[error("Meme {0} is not whitelisted")]
    NotWhitelisted(MemeId),

    #[error("Deposit of meme {0} has already been transferred")]
    DepositAlreadyTransferred(MemeId),

    #[error("Already initialized")]
    AlreadyInitialized,

    #[error("Minting is finished")]
    MintingFinished,

    #[error("Could not find meme {0}")]
    MemeNotFound(MemeId),

    #[error("Your storage deposit is too low. Must be {required} yN to process transaction, you have {available} yN")]
    InsufficientStorageDeposit { required: Balance, available: Balance },
}

impl MemeError {
    pub(crate) fn code(&self) -> u16 {
        match self {
            MemeError::PreconditionViolation(_) => 0,
            MemeError::Unauthorized(_) => 1,
            MemeError::InsufficientPayment { .. } => 2,
            MemeError::InsufficientSupply { .. } => 3,
            MemeError::Overflow(_) => 4,
            MemeError::AlreadyChallenged => 5,
            MemeError::EmergencyHalt => 6,
            MemeError::NotWhitelisted(_) => 7,
            MemeError::DepositAlreadyTransferred(_) => 8,
            MemeError::AlreadyInitialized => 9,
            MemeError::MintingFinished => 10,
            MemeError::MemeNotFound(_) => 11,
            MemeError::InsufficientStorageDeposit { .. } => 12,
        }
    }

    // consumes self
    // typical usage:
    // meme.buy(...).unwrap_or_else(|err| err.panic())
    pub(crate) fn panic(self) -> ! {
        env::panic_str(&format!("E{}: {}", self.code(), self))
    }

    pub(crate) fn precondition(message: &str) -> MemeError {
        MemeError::PreconditionViolation(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(MemeError::precondition("x").code(), 0);
        assert_eq!(MemeError::AlreadyChallenged.code(), 5);
        assert_eq!(MemeError::EmergencyHalt.code(), 6);
        assert_eq!(
            MemeError::InsufficientStorageDeposit { required: 1, available: 0 }.code(),
            12
        );
    }

    #[test]
    fn test_display() {
        let err = MemeError::InsufficientPayment { paid: 10, price: 20 };
        assert_eq!(
            err.to_string(),
            "Attached deposit of 10 is insufficient to pay the price of 20"
        );
    }
}
