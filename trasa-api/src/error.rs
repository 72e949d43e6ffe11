use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use trasa_core::BookingError;

use crate::response;

/// Everything a handler can surface, mapped onto the response envelope.
///
/// Lifecycle violations (invalid quantity, cancelling a confirmed booking)
/// are server-side failures here, not client errors: the request was well
/// formed, the state machine refused it.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Booking(#[from] BookingError),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Booking(BookingError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string())
            }
            AppError::Booking(BookingError::Storage { op, .. }) => {
                // Backend detail goes to the log, never to the client.
                tracing::error!("Storage error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_SERVER_ERROR",
                    format!("storage failure during {}", op),
                )
            }
            AppError::Booking(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                self.to_string(),
            ),
        };

        response::error(status, code, message)
    }
}
