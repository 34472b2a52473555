//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::data::DataError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (malformed query parameters)
    BadRequest(String),
    /// Internal server error
    Internal(String),
    /// Launch data query error
    Data(DataError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("INTERNAL_ERROR", msg),
                )
            }
            AppError::Data(e) => match e {
                DataError::UnknownSite(ref site) => (
                    StatusCode::NOT_FOUND,
                    ApiError::new("NOT_FOUND", e.to_string()).with_details(format!("site={}", site)),
                ),
                DataError::InvalidRange { .. } => {
                    (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", e.to_string()))
                }
                other => {
                    error!("Data error: {}", other);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ApiError::new("INTERNAL_ERROR", other.to_string()),
                    )
                }
            },
        };

        (status, Json(error)).into_response()
    }
}

impl From<DataError> for AppError {
    fn from(err: DataError) -> Self {
        AppError::Data(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_site_maps_to_not_found() {
        let response = AppError::from(DataError::UnknownSite("LC-99".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_range_maps_to_bad_request() {
        let response =
            AppError::from(DataError::InvalidRange { min: 9000, max: 100 }).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    async fn body_code(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice::<ApiError>(&bytes).unwrap().code
    }

    #[tokio::test]
    async fn test_load_errors_are_internal() {
        let response = AppError::from(DataError::EmptyDataset).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_code(response).await, "INTERNAL_ERROR");

        let response = AppError::Internal("Task join error".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_code(response).await, "INTERNAL_ERROR");
    }

    #[tokio::test]
    async fn test_bad_request_body() {
        let response = AppError::BadRequest("min_payload: invalid float".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_code(response).await, "BAD_REQUEST");
    }

    #[test]
    fn test_api_error_details_are_optional() {
        let json = serde_json::to_value(ApiError::new("NOT_FOUND", "missing")).unwrap();
        assert!(json.get("details").is_none());

        let json =
            serde_json::to_value(ApiError::new("NOT_FOUND", "missing").with_details("site=X"))
                .unwrap();
        assert_eq!(json["details"], "site=X");
    }
}
