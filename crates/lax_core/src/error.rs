use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidatorError {
    #[error("Unknown question type: {tag}")]
    UnknownQuestionType { tag: String },

    #[error("Empty roster: ground truth requires at least one player row")]
    EmptyRoster,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ValidatorError {
    /// Whether the caller can sensibly continue after this error.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ValidatorError::UnknownQuestionType { .. } => true,
            ValidatorError::EmptyRoster => false,
            ValidatorError::Serialization(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidatorError>;
