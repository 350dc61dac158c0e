use num_enum::IntoPrimitive;
use thiserror::Error;

#[repr(u32)]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
pub enum MinedError {
    #[error("Unknown error")]
    UnknownError = 0,

    // Caller-supplied input out of contract

    #[error("The work type is not supported or not active")]
    InvalidWorkType = 10,
    #[error("The difficulty must be between 1 and 1000")]
    InvalidDifficulty = 11,
    #[error("The complexity is outside its allowed range")]
    InvalidComplexity = 12,
    #[error("The significance is outside its allowed range")]
    InvalidSignificance = 13,
    #[error("The amount must be greater than zero")]
    InvalidAmount = 14,

    // Well-formed requests that conflict with current state

    #[error("The account already has a pending mining session")]
    ActiveSessionExists = 20,
    #[error("The mining session does not exist")]
    SessionNotFound = 21,
    #[error("The mining session is already completed")]
    SessionAlreadyCompleted = 22,
    #[error("The caller does not own the mining session")]
    NotSessionOwner = 23,
    #[error("The discovery does not exist")]
    DiscoveryNotFound = 24,
    #[error("The discovery was already validated by this validator")]
    AlreadyValidated = 25,
    #[error("The requested amount exceeds the current stake")]
    InsufficientStake = 26,
    #[error("The account balance is too low")]
    InsufficientBalance = 27,
    #[error("The validator is not registered")]
    ValidatorNotFound = 28,
    #[error("The validator is not active")]
    ValidatorInactive = 29,
    #[error("The caller is not allowed to perform this action")]
    Unauthorized = 30,
    #[error("The engine is paused")]
    Paused = 31,
    #[error("The clock may not move backwards")]
    ClockRegression = 32,

    // Expected, recoverable by retrying with a new nonce

    #[error("The provided proof did not satisfy the session target")]
    ProofBelowTarget = 40,
    #[error("The provided proof does not match the derived proof value")]
    ProofMismatch = 41,

    // Fatal to the operation; these indicate a bad constant table or a range bug

    #[error("The reward calculation overflowed")]
    RewardOverflow = 50,
    #[error("An accounting operation overflowed")]
    ArithmeticOverflow = 51,
    #[error("An accounting invariant was violated")]
    InvariantViolation = 52,

    #[error("The configuration is invalid")]
    InvalidConfig = 60,
    #[error("The snapshot version is not supported")]
    UnsupportedSnapshot = 61,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Validation,
    StateConflict,
    ProofRejection,
    ArithmeticSafety,
    Configuration,
}

impl MinedError {
    pub fn code(self) -> u32 {
        self.into()
    }

    pub fn class(self) -> ErrorClass {
        match self.code() {
            10..=19 => ErrorClass::Validation,
            20..=39 => ErrorClass::StateConflict,
            40..=49 => ErrorClass::ProofRejection,
            60..=69 => ErrorClass::Configuration,
            _ => ErrorClass::ArithmeticSafety,
        }
    }

    /// Errors that should be investigated as defects rather than reported back to the caller.
    pub fn is_fatal(self) -> bool {
        self.class() == ErrorClass::ArithmeticSafety
    }
}
