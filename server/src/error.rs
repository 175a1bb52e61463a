use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::Report;
use kernel::KernelError;
use serde::Serialize;
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

impl From<JsonRejection> for ErrorStatus {
    fn from(rejection: JsonRejection) -> Self {
        ErrorStatus(Report::new(KernelError::InvalidRequest).attach_printable(rejection.body_text()))
    }
}

impl From<PathRejection> for ErrorStatus {
    fn from(rejection: PathRejection) -> Self {
        ErrorStatus(Report::new(KernelError::InvalidRequest).attach_printable(rejection.body_text()))
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self.0.current_context() {
            KernelError::InvalidRequest => {
                (StatusCode::BAD_REQUEST, "Petición inválida".to_string())
            }
            KernelError::NotFound => (StatusCode::NOT_FOUND, "Libro no existe".to_string()),
            KernelError::InsufficientStock { available } => (
                StatusCode::BAD_REQUEST,
                format!("Stock insuficiente: {available}"),
            ),
            KernelError::Timeout => (StatusCode::SERVICE_UNAVAILABLE, "Error interno".to_string()),
            KernelError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error interno".to_string(),
            ),
        };

        if status.is_server_error() {
            tracing::error!("request failed: {:?}", self.0);
        } else {
            tracing::debug!("request rejected: {:?}", self.0);
        }

        (status, Json(ErrorResponse::new(error))).into_response()
    }
}
