use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder, post, web};
use log::{error, warn};

use crate::dto::request::RequestError;
use crate::dto::response::FunctionResponse;
use crate::repository::NotificationReader;
use crate::services::notifications::handle_request;

/// Reader shared by every worker of the HTTP server.
pub type SharedReader = dyn NotificationReader + Send + Sync;

/// Largest request body the function accepts.
pub const MAX_PAYLOAD_BYTES: usize = 4 * 1024 * 1024;

/// Body extractor settings registered alongside [`handle_function`].
pub fn payload_config() -> web::PayloadConfig {
    web::PayloadConfig::new(MAX_PAYLOAD_BYTES)
}

/// Function entry point. Always answers `200 OK`; failures travel in the envelope.
#[post("/")]
pub async fn handle_function(
    body: Result<web::Bytes, actix_web::Error>,
    repo: web::Data<SharedReader>,
) -> impl Responder {
    let response = match body {
        Ok(body) => {
            let repo = repo.into_inner();
            match web::block(move || handle_request(repo.as_ref(), &body)).await {
                Ok(response) => response,
                Err(e) => {
                    error!("Notification handler task failed: {e}");
                    FunctionResponse::error("Internal error")
                }
            }
        }
        Err(e) => {
            warn!("Failed to read request body: {e}");
            FunctionResponse::error(RequestError::Malformed.to_string())
        }
    };

    HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(response.to_json())
}
