//! Error types
//!
//! Nothing in the frame loop returns these to the host: configuration errors
//! surface at construction, event errors are logged by the bus and delivery
//! continues.

use thiserror::Error;

/// Invalid or unparsable game settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must lie in [0, 1] (got {value})")]
    OutOfUnitRange { field: &'static str, value: f32 },

    #[error("at least one player is required")]
    NoPlayers,
}

/// Failure reported by a single event subscriber
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventError {
    /// Subscriber (or state it needs) is already borrowed further up the stack
    #[error("subscriber busy while handling `{event}`")]
    Busy { event: &'static str },

    #[error("subscriber rejected `{event}`: {reason}")]
    Rejected { event: &'static str, reason: String },
}
