use axum::routing::post;
use axum::{Json, Router};
use log::info;
use tower_http::cors::CorsLayer;

use crate::service;
use crate::types::{SendRequest, SendResponse, StatusRequest, StatusResponse};

/// Builds the application router. Constructed explicitly so tests can
/// drive it without binding a listener.
pub fn app() -> Router {
    Router::new()
        .route("/send", post(send_message))
        .route("/status", post(queue_status))
        .layer(CorsLayer::permissive())
}

/// `POST /send`. Validation failures come back as a structured `errors`
/// list in a 200 response, not as an HTTP error.
pub async fn send_message(Json(req): Json<SendRequest>) -> Json<SendResponse> {
    let errors = service::validate(&req);
    if !errors.is_empty() {
        info!("Rejecting send: {}", errors.join(", "));
        return Json(SendResponse {
            response: None,
            errors,
        });
    }

    info!("Sending message to {}", req.target);
    Json(SendResponse {
        response: Some(service::send(&req.target, &req.message)),
        errors: Vec::new(),
    })
}

/// `POST /status`. The id is not validated; negative and zero pass through.
pub async fn queue_status(Json(req): Json<StatusRequest>) -> Json<StatusResponse> {
    info!("Status lookup for queue id {}", req.id);
    Json(StatusResponse {
        response: service::status(req.id),
    })
}
