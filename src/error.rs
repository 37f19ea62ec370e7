//! Failure taxonomy for one invocation.
//!
//! Nothing here is retried or recovered: an invocation either returns a
//! value in its declared output shape or exactly one of these errors,
//! each naming the operation that produced it.

use thiserror::Error;

use crate::ops::Operation;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A required parameter was empty. Detected before any network call.
    #[error("{operation}: invalid input: parameter `{parameter}` {reason}")]
    InvalidInput {
        operation: Operation,
        parameter: &'static str,
        reason: &'static str,
    },

    /// The request would leave the configured domain allow-list.
    /// Detected before any network call.
    #[error("{operation}: host `{host}` is outside the allowed domains")]
    DomainNotAllowed { operation: Operation, host: String },

    /// The transport failed before a response arrived.
    #[error("{operation}: transport error: {detail}")]
    Transport { operation: Operation, detail: String },

    /// Upstream answered with a non-2xx status. The raw body is kept
    /// for diagnosis.
    #[error("{operation}: upstream returned status {status}: {body}")]
    Remote {
        operation: Operation,
        status: u16,
        body: String,
    },

    /// The response decoded as JSON but lacks fields the output shape
    /// requires. Missing fields are never defaulted.
    #[error("{operation}: malformed response: {detail}")]
    MalformedResponse { operation: Operation, detail: String },
}

impl Error {
    /// Which operation failed.
    pub fn operation(&self) -> Operation {
        match self {
            Error::InvalidInput { operation, .. }
            | Error::DomainNotAllowed { operation, .. }
            | Error::Transport { operation, .. }
            | Error::Remote { operation, .. }
            | Error::MalformedResponse { operation, .. } => *operation,
        }
    }

    /// Upstream HTTP status, when the failure was a remote one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}
