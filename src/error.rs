use thiserror::Error;

use crate::usecase::ports::source::SourceError;

/// Top-level error for the console services.
///
/// `Validation` carries the inline message shown next to the form field;
/// `Mutation` is the generic "failed to create X" surfaced after a network
/// failure, with the cause kept for the log.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("{0}")]
    Validation(String),

    #[error("Failed to {action} {entity}")]
    Mutation {
        action: &'static str,
        entity: &'static str,
        #[source]
        source: SourceError,
    },

    #[error(transparent)]
    Source(#[from] SourceError),
}

impl ConsoleError {
    pub fn validation(message: impl Into<String>) -> Self {
        ConsoleError::Validation(message.into())
    }

    /// The message a screen shows inline or in a toast.
    pub fn display_message(&self) -> String {
        self.to_string()
    }
}
