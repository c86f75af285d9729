//! Remote object-storage backed notification repository.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;

use crate::domain::notification::Notification;
use crate::models::config::ServerConfig;
use crate::repository::errors::RepositoryResult;
use crate::repository::{NotificationListQuery, NotificationReader};

/// Header carrying the application key on every remote call.
pub const API_KEY_HEADER: &str = "X-API-KEY";
/// Fixed authorization scheme expected by the remote API.
pub const AUTHORIZATION_SCHEME: &str = "API-KEY";

/// Envelope of the remote get-list response: `{data: {data: {response: [...]}}}`.
///
/// Missing or null levels decode as an empty list; only a body that is not
/// JSON, or has mistyped levels, is rejected.
#[derive(Debug, Default, Deserialize)]
struct GetListResponse {
    #[serde(default)]
    data: Option<GetListData>,
}

#[derive(Debug, Default, Deserialize)]
struct GetListData {
    #[serde(default)]
    data: Option<GetListPayload>,
}

#[derive(Debug, Default, Deserialize)]
struct GetListPayload {
    #[serde(default)]
    response: Option<Vec<Notification>>,
}

impl GetListResponse {
    fn into_notifications(self) -> Vec<Notification> {
        self.data
            .and_then(|data| data.data)
            .and_then(|payload| payload.response)
            .unwrap_or_default()
    }
}

/// Fetches notifications through `POST {base_url}/v1/object/get-list/{table_slug}`.
///
/// A fresh blocking client is built for each call so the repository holds no
/// connection state and can be shared freely between invocations.
#[derive(Debug, Clone)]
pub struct HttpNotificationRepository {
    base_url: String,
    table_slug: String,
    timeout: Duration,
}

impl HttpNotificationRepository {
    pub fn new(
        base_url: impl Into<String>,
        table_slug: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            table_slug: table_slug.into(),
            timeout,
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            config.base_url.clone(),
            config.table_slug.clone(),
            config.request_timeout(),
        )
    }

    pub fn list_url(&self) -> String {
        format!("{}/v1/object/get-list/{}", self.base_url, self.table_slug)
    }

    fn client(&self) -> RepositoryResult<Client> {
        Ok(Client::builder().timeout(self.timeout).build()?)
    }
}

impl NotificationReader for HttpNotificationRepository {
    fn list_notifications(
        &self,
        query: &NotificationListQuery,
    ) -> RepositoryResult<Vec<Notification>> {
        let url = self.list_url();
        log::debug!(
            "Requesting notifications for client {} from {url}",
            query.client_id
        );

        let response = self
            .client()?
            .post(&url)
            .header(AUTHORIZATION, AUTHORIZATION_SCHEME)
            .header(API_KEY_HEADER, query.app_id.as_str())
            .json(&query.to_request_body())
            .send()?
            .error_for_status()?;

        let body = response.bytes()?;
        let parsed: GetListResponse = serde_json::from_slice(&body)?;

        Ok(parsed.into_notifications())
    }
}
