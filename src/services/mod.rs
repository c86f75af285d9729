use thiserror::Error;

pub mod notifications;

/// Failures surfaced to the caller as an error envelope.
///
/// The display text of each variant is the user-facing message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    Decode(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Remote(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
