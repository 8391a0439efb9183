use thiserror::Error;

pub type Result<T> = std::result::Result<T, WagerError>;

/// Operational failures. These travel the `?` plane; admission decisions
/// never do (see [`RejectReason`]).
#[derive(Error, Debug)]
pub enum WagerError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl WagerError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// User-facing rejection taxonomy. Every admission decision resolves into
/// exactly one of these, and the `Display` string is the message shown to
/// the user. None of them are fatal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RejectReason {
    #[error("Connect your wallet to place a bet")]
    AuthenticationRequired,

    #[error("Initialization required: verify your access code")]
    AuthorizationRequired,

    #[error("Round in progress, wait for settlement")]
    RoundInProgress,

    #[error("Select a target cell")]
    SelectionMissing,

    #[error("Invalid bet amount")]
    AmountInvalid,

    #[error("Insufficient balance: {balance:.4} {symbol}")]
    InsufficientFunds { balance: f64, symbol: String },

    #[error("{0}")]
    AccessCodeRejected(String),

    #[error("Verification service unreachable, try again")]
    ConnectivityFailure,
}
