use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("player id must not be empty")]
    EmptyPlayerId,

    #[error("invalid session id: {0}")]
    InvalidSessionId(String),
}
