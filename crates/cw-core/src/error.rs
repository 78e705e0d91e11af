//! # AppError
//!
//! Centralized error handling for the CookWithUs service.
//! Handlers raise the specific kind as soon as a rule is broken; the API
//! layer is the only place that turns these into status codes.

use thiserror::Error;

/// The primary error type for all cw-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Malformed or missing input (e.g., blank title, stars out of range)
    #[error("{0}")]
    Validation(String),

    /// Missing or unknown `X-Cook-Id`
    #[error("{0}")]
    Unauthenticated(String),

    /// Business-rule violation (e.g., rating your own recipe)
    #[error("{0}")]
    Forbidden(String),

    /// Entity not found (kind, id)
    #[error("{0} '{1}' not found.")]
    NotFound(&'static str, String),

    /// Uniqueness violation (e.g., duplicate recipe title)
    #[error("{0}")]
    Conflict(String),

    /// Anything unclassified. The message is logged, never sent to clients.
    #[error("internal service error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound(kind, id.into())
    }
}

/// A specialized Result type for CookWithUs logic.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_kind_and_id() {
        let err = AppError::not_found("Recipe", "r1");
        assert_eq!(err.to_string(), "Recipe 'r1' not found.");
    }

    #[test]
    fn user_facing_kinds_display_bare_message() {
        assert_eq!(
            AppError::Forbidden("You cannot rate your own recipe.".into()).to_string(),
            "You cannot rate your own recipe."
        );
        assert_eq!(AppError::validation("bad").to_string(), "bad");
    }
}
