//! Domain types for the notification list function.

pub mod notification;
pub mod types;
