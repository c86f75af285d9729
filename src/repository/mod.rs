use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Value, json};

use crate::domain::notification::{Notification, TIME_TAKE_FIELD};
use crate::domain::types::{AppId, ClientId};
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod notification;

pub use notification::HttpNotificationRepository;

/// Filter sent to the remote list API: one client, visible up to `now`.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationListQuery {
    pub app_id: AppId,
    pub client_id: ClientId,
    pub now: DateTime<Utc>,
}

impl NotificationListQuery {
    pub fn new(app_id: AppId, client_id: ClientId) -> Self {
        Self {
            app_id,
            client_id,
            now: Utc::now(),
        }
    }

    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Builds the `{"data": {...}}` request body understood by the remote API.
    pub fn to_request_body(&self) -> Value {
        json!({
            "data": {
                "client_id": self.client_id.as_str(),
                TIME_TAKE_FIELD: {
                    "$lte": self.now.to_rfc3339_opts(SecondsFormat::Nanos, true),
                },
            }
        })
    }
}

pub trait NotificationReader {
    fn list_notifications(
        &self,
        query: &NotificationListQuery,
    ) -> RepositoryResult<Vec<Notification>>;
}
