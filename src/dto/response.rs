//! Outbound `{status, data}` envelope returned for every invocation.

use serde::Serialize;

use crate::domain::notification::Notification;
use crate::pagination::Page;

/// Serialized when the envelope itself cannot be encoded.
const FALLBACK_ERROR_JSON: &str =
    r#"{"status":"error","data":{"message":"Error while marshalling response"}}"#;

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Done,
    Error,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ResponseData {
    Page(Page<Notification>),
    Error { message: String },
}

#[derive(Debug, Serialize)]
pub struct FunctionResponse {
    pub status: ResponseStatus,
    pub data: ResponseData,
}

impl FunctionResponse {
    pub fn done(page: Page<Notification>) -> Self {
        Self {
            status: ResponseStatus::Done,
            data: ResponseData::Page(page),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            data: ResponseData::Error {
                message: message.into(),
            },
        }
    }

    /// Encodes the envelope, falling back to a fixed error envelope.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|err| {
            log::error!("Failed to encode response: {err}");
            FALLBACK_ERROR_JSON.to_string()
        })
    }
}
