use axum::response::{IntoResponse, Response};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    status: &'static str,
    entorno: String,
    tiempo: String,
}

impl StatusResponse {
    pub fn online() -> Self {
        Self {
            status: "online",
            entorno: std::env::var("APP_ENV").unwrap_or_else(|_| "local".to_string()),
            tiempo: OffsetDateTime::now_utc()
                .format(&Rfc3339)
                .unwrap_or_default(),
        }
    }
}

impl IntoResponse for StatusResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}
