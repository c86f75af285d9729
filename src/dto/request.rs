//! Inbound request envelope and its typed, validated parameters.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::types::{AppId, ClientId};

/// Reasons an inbound payload cannot be turned into list parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("Error while unmarshalling request")]
    Malformed,
    #[error("{0} required")]
    Missing(&'static str),
    #[error("{0} must be a string")]
    NotAString(&'static str),
    #[error("{0} cannot be empty")]
    Empty(&'static str),
    #[error("{0} must be a number")]
    NotANumber(&'static str),
}

/// HTTP details forwarded by the function runtime. Accepted but unused.
#[derive(Debug, Default, Deserialize)]
pub struct HttpRequestData {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub headers: Option<HashMap<String, Vec<String>>>,
    #[serde(default)]
    pub params: Option<HashMap<String, Vec<String>>>,
    #[serde(default)]
    pub body: Option<String>,
}

/// Caller authentication forwarded by the function runtime. Accepted but unused.
#[derive(Debug, Default, Deserialize)]
pub struct AuthData {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub data: Option<Map<String, Value>>,
}

/// Raw request envelope: `{ "data": {...}, "request_data": {...}, "auth": {...} }`.
#[derive(Debug, Default, Deserialize)]
pub struct FunctionRequest {
    #[serde(default)]
    pub request_data: Option<HttpRequestData>,
    #[serde(default)]
    pub auth: Option<AuthData>,
    #[serde(default)]
    pub data: Option<Map<String, Value>>,
}

impl FunctionRequest {
    /// Decodes the raw payload bytes. A JSON `null` is an empty request.
    pub fn decode(payload: &[u8]) -> Result<Self, RequestError> {
        serde_json::from_slice::<Option<Self>>(payload)
            .map(Option::unwrap_or_default)
            .map_err(|err| {
                log::warn!("Failed to decode request payload: {err}");
                RequestError::Malformed
            })
    }

    /// Validates the free-form `data` block into typed parameters.
    pub fn params(&self) -> Result<NotificationListParams, RequestError> {
        match &self.data {
            Some(data) => NotificationListParams::try_from(data),
            None => NotificationListParams::try_from(&Map::new()),
        }
    }
}

/// Validated parameters of a notification list invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationListParams {
    pub app_id: AppId,
    pub client_id: ClientId,
    pub offset: i64,
    pub limit: i64,
}

fn required<'a>(
    data: &'a Map<String, Value>,
    key: &str,
    label: &'static str,
) -> Result<&'a Value, RequestError> {
    match data.get(key) {
        None | Some(Value::Null) => Err(RequestError::Missing(label)),
        Some(value) => Ok(value),
    }
}

fn required_str<'a>(
    data: &'a Map<String, Value>,
    key: &str,
    label: &'static str,
) -> Result<&'a str, RequestError> {
    required(data, key, label)?
        .as_str()
        .ok_or(RequestError::NotAString(label))
}

/// Reads a JSON number, truncating any fractional part toward zero.
fn required_integer(
    data: &Map<String, Value>,
    key: &str,
    label: &'static str,
) -> Result<i64, RequestError> {
    let value = required(data, key, label)?;
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    // Float to int casts saturate, so out-of-range values clamp to i64 bounds.
    value
        .as_f64()
        .map(|n| n.trunc() as i64)
        .ok_or(RequestError::NotANumber(label))
}

impl TryFrom<&Map<String, Value>> for NotificationListParams {
    type Error = RequestError;

    fn try_from(data: &Map<String, Value>) -> Result<Self, Self::Error> {
        let app_id = AppId::new(required_str(data, "app_id", "App id")?)
            .map_err(|_| RequestError::Empty("App id"))?;
        let client_id = ClientId::new(required_str(data, "client_id", "Client id")?)
            .map_err(|_| RequestError::Empty("Client id"))?;
        let offset = required_integer(data, "offset", "Offset")?;
        let limit = required_integer(data, "limit", "Limit")?;

        Ok(Self {
            app_id,
            client_id,
            offset,
            limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(payload: Value) -> Result<NotificationListParams, RequestError> {
        let bytes = serde_json::to_vec(&payload).expect("serializable");
        FunctionRequest::decode(&bytes)?.params()
    }

    #[test]
    fn decodes_valid_request() {
        let params = params(json!({
            "data": { "app_id": "app", "client_id": "client", "offset": 10, "limit": 5 }
        }))
        .expect("valid request");

        assert_eq!(params.app_id.as_str(), "app");
        assert_eq!(params.client_id.as_str(), "client");
        assert_eq!(params.offset, 10);
        assert_eq!(params.limit, 5);
    }

    #[test]
    fn accepts_runtime_metadata() {
        let params = params(json!({
            "request_data": {
                "method": "POST",
                "path": "/",
                "headers": { "Content-Type": ["application/json"] },
                "params": {},
                "body": null
            },
            "auth": { "type": "apikey", "data": { "user_id": "u1" } },
            "data": { "app_id": "app", "client_id": "client", "offset": 0, "limit": 1 }
        }));

        assert!(params.is_ok());
    }

    #[test]
    fn malformed_payload_is_rejected() {
        assert_eq!(
            FunctionRequest::decode(b"{not json").unwrap_err(),
            RequestError::Malformed
        );
        assert_eq!(
            FunctionRequest::decode(b"[1, 2]").unwrap_err(),
            RequestError::Malformed
        );
        assert_eq!(
            FunctionRequest::decode(br#"{"data": "text"}"#).unwrap_err(),
            RequestError::Malformed
        );
    }

    #[test]
    fn missing_app_id_is_reported_first() {
        assert_eq!(params(json!({ "data": {} })), Err(RequestError::Missing("App id")));
        assert_eq!(params(json!({})), Err(RequestError::Missing("App id")));
        assert_eq!(
            params(json!({
                "data": { "app_id": null, "client_id": "c", "offset": 0, "limit": 1 }
            })),
            Err(RequestError::Missing("App id"))
        );
        assert_eq!(RequestError::Missing("App id").to_string(), "App id required");
    }

    #[test]
    fn null_payload_is_an_empty_request() {
        let request = FunctionRequest::decode(b"null").expect("null decodes");
        assert!(request.data.is_none());
        assert_eq!(request.params(), Err(RequestError::Missing("App id")));

        assert_eq!(
            FunctionRequest::decode(b"  null\n").and_then(|r| r.params()),
            Err(RequestError::Missing("App id"))
        );
    }

    #[test]
    fn mistyped_fields_are_validation_errors() {
        assert_eq!(
            params(json!({ "data": { "app_id": 7 } })),
            Err(RequestError::NotAString("App id"))
        );
        assert_eq!(
            params(json!({ "data": { "app_id": "  " } })),
            Err(RequestError::Empty("App id"))
        );
        assert_eq!(
            params(json!({ "data": { "app_id": "a" } })),
            Err(RequestError::Missing("Client id"))
        );
        assert_eq!(
            params(json!({ "data": { "app_id": "a", "client_id": ["c"] } })),
            Err(RequestError::NotAString("Client id"))
        );
        assert_eq!(
            params(json!({ "data": { "app_id": "a", "client_id": "c", "limit": 1 } })),
            Err(RequestError::Missing("Offset"))
        );
        assert_eq!(
            params(json!({
                "data": { "app_id": "a", "client_id": "c", "offset": "1", "limit": 1 }
            })),
            Err(RequestError::NotANumber("Offset"))
        );
        assert_eq!(
            params(json!({ "data": { "app_id": "a", "client_id": "c", "offset": 0 } })),
            Err(RequestError::Missing("Limit"))
        );
        assert_eq!(
            params(json!({
                "data": { "app_id": "a", "client_id": "c", "offset": 0, "limit": true }
            })),
            Err(RequestError::NotANumber("Limit"))
        );
    }

    #[test]
    fn fractional_numbers_are_truncated() {
        let params = params(json!({
            "data": { "app_id": "a", "client_id": "c", "offset": 2.9, "limit": -1.5 }
        }))
        .expect("valid request");

        assert_eq!(params.offset, 2);
        assert_eq!(params.limit, -1);
    }
}
