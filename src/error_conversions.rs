//! Error conversion glue between the request, repository and service layers.

use crate::dto::request::RequestError;
use crate::repository::errors::RepositoryError;
use crate::services::ServiceError;

pub const REMOTE_FETCH_ERROR: &str = "Error while getting single object";
pub const REMOTE_DECODE_ERROR: &str = "Error while unmarshalling get list object";

impl From<RequestError> for ServiceError {
    fn from(val: RequestError) -> Self {
        match val {
            RequestError::Malformed => ServiceError::Decode(val.to_string()),
            _ => ServiceError::Validation(val.to_string()),
        }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(val: RepositoryError) -> Self {
        match val {
            RepositoryError::Transport(_) | RepositoryError::UnexpectedStatus(_) => {
                ServiceError::Remote(REMOTE_FETCH_ERROR.to_string())
            }
            RepositoryError::Decode(_) => ServiceError::Remote(REMOTE_DECODE_ERROR.to_string()),
        }
    }
}
