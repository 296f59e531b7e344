use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Opaque player identity.
///
/// Player ids are supplied by the caller (the auth layer, a device-local
/// guest id, a test fixture) and the ledger never interprets them beyond
/// equality. The only structural requirement is that an id is non-empty
/// after trimming; the store key layout depends on it.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerId(String);

impl PlayerId {
    /// Wrap a caller-supplied id. Fails on empty or whitespace-only input.
    pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(TypeError::EmptyPlayerId);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Mint a fresh id (UUID v7) for players created without a
    /// caller-supplied identity.
    pub fn generate() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    /// The raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlayerId {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlayerId> for String {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

impl fmt::Debug for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlayerId({})", self.0)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
