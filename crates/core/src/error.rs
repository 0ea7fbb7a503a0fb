use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("participant already registered: {name}")]
    DuplicateName { name: String },

    #[error("participant not found: {name}")]
    NotFound { name: String },

    #[error("a draw needs at least 2 participants, have {count}")]
    InsufficientParticipants { count: usize },

    #[error("no valid assignment found after {attempts} attempts")]
    DrawExhausted { attempts: u32 },

    #[error("could not notify {name}: {source}")]
    Notification { name: String, source: anyhow::Error },
}

pub type Result<T> = std::result::Result<T, CoreError>;
