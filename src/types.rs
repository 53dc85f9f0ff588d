use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct SendRequest {
    pub target: String,
    pub message: String,
}

/// Exactly one of `response` or `errors` is populated per call, never both.
#[derive(Serialize)]
pub struct SendResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

#[derive(Deserialize)]
pub struct StatusRequest {
    pub id: i64,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub response: String,
}
