use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    RuleError(#[from] cadence_rule::error::RuleError),

    #[error(transparent)]
    CoreError(#[from] cadence_core::error::CoreError),

    #[error("Missing title")]
    MissingTitle,

    #[error("Missing task id")]
    MissingId,

    #[error("Invalid task id: {0:?}")]
    InvalidId(String),

    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ServiceError {
    /// The parse kind behind a rule or date error, if any.
    #[must_use]
    pub const fn parse_kind(&self) -> Option<cadence_rule::rule::ParseErrorKind> {
        match self {
            Self::RuleError(err) => err.kind(),
            _ => None,
        }
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
