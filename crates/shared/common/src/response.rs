//! Response envelope shared by every endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Standard API response wrapper.
///
/// Success responses carry the payload in `data`; failures carry a
/// human-readable message in `data` and `success: false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl ApiResponse<String> {
    /// Failed response carrying only a message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: message.into(),
        }
    }

    /// Successful response carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self::success(message.into())
    }
}

/// Created response helper for POST endpoints
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(ApiResponse::success(self.0))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let json = serde_json::to_value(ApiResponse::success(vec![1, 2, 3])).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "data": [1, 2, 3] }));
    }

    #[test]
    fn test_failure_envelope_shape() {
        let json = serde_json::to_value(ApiResponse::failure("boom")).unwrap();
        assert_eq!(json, serde_json::json!({ "success": false, "data": "boom" }));
    }

    #[test]
    fn test_message_is_successful() {
        let response = ApiResponse::message("done");
        assert!(response.success);
        assert_eq!(response.data, "done");
    }

    #[test]
    fn test_created_status() {
        let response = Created("new").into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
