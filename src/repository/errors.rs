use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected status code: {0}")]
    UnexpectedStatus(u16),

    #[error("Decode error: {0}")]
    Decode(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return RepositoryError::Decode(err.to_string());
        }

        match err.status() {
            Some(status) => RepositoryError::UnexpectedStatus(status.as_u16()),
            None if err.is_timeout() => {
                RepositoryError::Transport(format!("Request timed out: {err}"))
            }
            None => RepositoryError::Transport(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Decode(err.to_string())
    }
}
