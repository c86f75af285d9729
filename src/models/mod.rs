//! Configuration models shared by the entry points.

pub mod config;
