use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use medkit_pipeline::{ErrorKind, InvocationFailure};

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Invocation(InvocationFailure),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Invocation(failure) => invocation_status(failure.error_kind),
        }
    }
}

fn invocation_status(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::UnknownTool => StatusCode::NOT_FOUND,
        ErrorKind::InputError => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::RenderError => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorKind::BackendUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::BackendRejected
        | ErrorKind::MalformedResponse
        | ErrorKind::ValidationFailure => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::NotFound(message) | ApiError::BadRequest(message) => {
                (status, Json(ErrorBody { error: message })).into_response()
            }
            ApiError::Invocation(failure) => {
                if status.is_server_error() {
                    tracing::error!(
                        invocation_id = %failure.invocation_id,
                        stage = ?failure.stage,
                        error_kind = ?failure.error_kind,
                        "invocation failed"
                    );
                }
                (status, Json(failure)).into_response()
            }
        }
    }
}

impl From<InvocationFailure> for ApiError {
    fn from(failure: InvocationFailure) -> Self {
        ApiError::Invocation(failure)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
