//! The operation error taxonomy.
//!
//! Validation failures come back as typed values, never panics, so the HTTP
//! layer can render them without a generic error boundary. Backend failures
//! pass through as `Store`.

use agora_ballot::VoteError;
use agora_lifecycle::LifecycleError;
use agora_store::StoreError;
use thiserror::Error;

pub type OpResult<T> = Result<T, OpError>;

#[derive(Debug, Error)]
pub enum OpError {
    /// No valid caller identity. Normally surfaced by the HTTP layer before
    /// this core is reached; kept for completeness.
    #[error("unauthorized")]
    Unauthorized,

    /// Identity known but not permitted, with a human-readable reason.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Poll or entry absent (or outside the caller's community).
    #[error("not found")]
    NotFound,

    /// Malformed or rule-violating input, with a specific message.
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl OpError {
    pub fn forbidden(reason: impl Into<String>) -> Self {
        Self::Forbidden(reason.into())
    }

    pub fn bad_request(reason: impl Into<String>) -> Self {
        Self::BadRequest(reason.into())
    }
}

impl From<VoteError> for OpError {
    fn from(err: VoteError) -> Self {
        if err.is_forbidden() {
            Self::Forbidden(err.to_string())
        } else {
            Self::BadRequest(err.to_string())
        }
    }
}

impl From<LifecycleError> for OpError {
    fn from(err: LifecycleError) -> Self {
        Self::BadRequest(err.to_string())
    }
}
