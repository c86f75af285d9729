use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding the moment a notification becomes visible.
pub const TIME_TAKE_FIELD: &str = "time_take";

/// A notification record as returned by the remote list API.
///
/// The record is kept as an opaque JSON object and serialized back unchanged;
/// only [`TIME_TAKE_FIELD`] is interpreted.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Notification(Map<String, Value>);

impl Notification {
    /// Parses `time_take` as an RFC3339 timestamp.
    ///
    /// Returns `None` when the field is missing, not a string, or malformed.
    pub fn time_take(&self) -> Option<DateTime<FixedOffset>> {
        self.0
            .get(TIME_TAKE_FIELD)
            .and_then(Value::as_str)
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

/// Orders two records newest first.
///
/// A record without a parseable `time_take` is never considered newer than
/// another record, so malformed records end up after all valid ones.
fn newest_first(a: &Notification, b: &Notification) -> Ordering {
    match (a.time_take(), b.time_take()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sorts notifications by `time_take` descending.
///
/// The sort is stable: records with equal timestamps, and malformed records,
/// keep their relative order from the remote response.
pub fn sort_newest_first(notifications: &mut [Notification]) {
    notifications.sort_by(newest_first);
}
