//! Error types for planning and journey operations.
//!
//! Every error is a caller contract violation. Nothing here is retryable.

use thiserror::Error as ThisError;

use crate::journey::JourneyState;

#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("cannot {action} a journey in state {from:?}")]
    InvalidTransition {
        from: JourneyState,
        action: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn invalid_transition(from: JourneyState, action: &'static str) -> Self {
        Self::InvalidTransition { from, action }
    }
}
