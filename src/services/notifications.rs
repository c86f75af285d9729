//! Fetch, sort and paginate pipeline behind the notification list function.

use chrono::{DateTime, Utc};

use crate::domain::notification::{Notification, sort_newest_first};
use crate::dto::request::{FunctionRequest, NotificationListParams};
use crate::dto::response::FunctionResponse;
use crate::pagination::Page;
use crate::repository::{NotificationListQuery, NotificationReader};
use crate::services::{ServiceError, ServiceResult};

/// Fetches the client's notifications visible at `now` and returns the
/// requested page, newest first.
pub fn list_notifications<R>(
    repo: &R,
    params: &NotificationListParams,
    now: DateTime<Utc>,
) -> ServiceResult<Page<Notification>>
where
    R: NotificationReader + ?Sized,
{
    let query =
        NotificationListQuery::new(params.app_id.clone(), params.client_id.clone()).at(now);

    let mut notifications = repo.list_notifications(&query).map_err(|err| {
        log::error!(
            "Failed to list notifications for client {}: {err}",
            params.client_id
        );
        ServiceError::from(err)
    })?;

    sort_newest_first(&mut notifications);

    let total = notifications.len();
    let page = Page::new(notifications, params.offset, params.limit);
    log::info!(
        "Listed {} of {total} notifications for app {} client {} (offset {}, limit {})",
        page.data.len(),
        params.app_id,
        params.client_id,
        params.offset,
        params.limit
    );

    Ok(page)
}

/// Runs the whole pipeline for a raw payload, stamping the filter with `now`.
pub fn handle_request_at<R>(repo: &R, payload: &[u8], now: DateTime<Utc>) -> FunctionResponse
where
    R: NotificationReader + ?Sized,
{
    let result = FunctionRequest::decode(payload)
        .and_then(|request| request.params())
        .map_err(|err| {
            log::warn!("Rejected notification list request: {err}");
            ServiceError::from(err)
        })
        .and_then(|params| list_notifications(repo, &params, now));

    match result {
        Ok(page) => FunctionResponse::done(page),
        Err(err) => FunctionResponse::error(err.to_string()),
    }
}

/// Runs the whole pipeline for a raw payload at the current time.
pub fn handle_request<R>(repo: &R, payload: &[u8]) -> FunctionResponse
where
    R: NotificationReader + ?Sized,
{
    handle_request_at(repo, payload, Utc::now())
}
