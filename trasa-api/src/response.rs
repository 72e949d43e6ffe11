use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Uniform response envelope. Every endpoint answers with either
/// `{"success": true, "data": ...}` or
/// `{"success": false, "error": {"code": ..., "message": ...}}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Wrap `data` in a success envelope with the given status code.
pub fn success<T: Serialize>(status: StatusCode, data: T) -> Response {
    let body = ApiResponse {
        success: true,
        data: Some(data),
        error: None,
    };
    (status, Json(body)).into_response()
}

/// Build an error envelope with the given status code.
pub fn error(status: StatusCode, code: &str, message: String) -> Response {
    let body = ApiResponse::<()> {
        success: false,
        data: None,
        error: Some(ErrorBody {
            code: code.to_string(),
            message,
        }),
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_omits_error_field() {
        let json = serde_json::to_value(ApiResponse {
            success: true,
            data: Some(42),
            error: None,
        })
        .unwrap();

        assert_eq!(json, serde_json::json!({ "success": true, "data": 42 }));
    }

    #[test]
    fn test_error_envelope_omits_data_field() {
        let json = serde_json::to_value(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ErrorBody {
                code: "NOT_FOUND".to_string(),
                message: "booking 9 not found".to_string(),
            }),
        })
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "error": { "code": "NOT_FOUND", "message": "booking 9 not found" }
            })
        );
    }
}
