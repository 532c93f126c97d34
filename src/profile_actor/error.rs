//! Error types for the PricingProfile actor.

use thiserror::Error;

/// Errors that can occur during pricing-profile operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProfileError {
    /// The requested profile was not found (or belongs to another user).
    #[error("Pricing profile not found: {0}")]
    NotFound(String),

    /// The profile data provided is invalid.
    #[error("Pricing profile validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ProfileError {
    fn from(msg: String) -> Self {
        ProfileError::ActorCommunicationError(msg)
    }
}
