use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use waitlist_types::{ALREADY_ON_WAITLIST_MESSAGE, ErrorBody, ErrorCode};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidInput(msg) => {
                tracing::debug!(error = %msg, "Rejected invalid input");
                error_resp(StatusCode::BAD_REQUEST, ErrorCode::InvalidInput, msg)
            }
            AppError::DuplicateEntry => {
                tracing::debug!("Rejected duplicate waitlist entry");
                error_resp(
                    StatusCode::CONFLICT,
                    ErrorCode::AlreadyOnWaitlist,
                    ALREADY_ON_WAITLIST_MESSAGE.to_string(),
                )
            }
            // Details stay in the logs; the client only gets a generic message.
            AppError::StorageUnavailable(detail) => {
                tracing::error!(error = %detail, "Storage unavailable");
                error_resp(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::StorageUnavailable,
                    "Service temporarily unavailable".to_string(),
                )
            }
            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                error_resp(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError,
                    "Internal server error".to_string(),
                )
            }
        }
    }
}

fn error_resp(status: StatusCode, code: ErrorCode, message: String) -> Response {
    (status, Json(ErrorBody { code, message })).into_response()
}
