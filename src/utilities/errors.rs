//! Error types for the TeamAI core.

use thiserror::Error;

/// Errors surfaced by the response composer and the team registry.
///
/// Every variant maps to exactly one HTTP status at the API boundary:
/// `InvalidRequest` and `Validation` become 400 responses carrying their
/// message; `UnknownCharacter` and `Internal` collapse to a generic 500
/// body so no internal detail leaks to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required request field is missing or empty.
    #[error("{message}")]
    InvalidRequest { message: String },

    /// A constraint violation: size limits, unknown ids.
    #[error("{message}")]
    Validation { message: String },

    /// A character id survived resolution but has no catalog entry.
    /// Unreachable given the validation order; kept as a defensive branch.
    #[error("Character not found: {character_id}")]
    UnknownCharacter { character_id: String },

    /// Anything unanticipated.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ApiError {
    /// Shorthand for [`ApiError::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Shorthand for [`ApiError::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Shorthand for [`ApiError::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True for errors the caller can fix by changing the request.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRequest { .. } | Self::Validation { .. }
        )
    }
}
