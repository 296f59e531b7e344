use opl_store::StoreError;
use opl_types::PlayerId;

/// Errors produced by ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// A numeric session field failed validation.
    #[error("invalid {field}: must be a non-negative number, got {value}")]
    InvalidNumeric { field: &'static str, value: f64 },

    /// The session category label is required.
    #[error("session type must not be empty")]
    EmptySessionType,

    /// Signup attempted for an id that already has a record.
    #[error("player already registered: {0}")]
    PlayerExists(PlayerId),

    /// A stored document could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The persistence medium failed. Recoverable: boundaries degrade to
    /// defaults instead of surfacing this to end users.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl LedgerError {
    /// `true` for caller-input errors that must reject the request without
    /// mutating state, as opposed to persistence failures, which degrade.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidNumeric { .. } | Self::EmptySessionType | Self::PlayerExists(_)
        )
    }
}

/// Result alias for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;
