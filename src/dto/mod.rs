//! DTOs describing the function request and response envelopes.

pub mod request;
pub mod response;
