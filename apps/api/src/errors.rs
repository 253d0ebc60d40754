use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::matching::calculator::MatchError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// A required field absent from the request body.
    #[error("Missing input: {0}")]
    MissingField(String),

    #[error(transparent)]
    Match(#[from] MatchError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::MissingField(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "MISSING_INPUT", msg.clone())
            }
            AppError::Match(e @ MatchError::MissingInput { .. }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "MISSING_INPUT",
                e.to_string(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

/// Body rejections reuse the error envelope. A missing field is `MISSING_INPUT`;
/// anything else wrong with the body is `VALIDATION_ERROR`.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        match rejection {
            JsonRejection::JsonDataError(_) if message.contains("missing field") => {
                AppError::MissingField(message)
            }
            _ => AppError::Validation(message),
        }
    }
}

/// `Json` extractor whose rejections go through `AppError`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_of(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_missing_input_maps_to_422() {
        let err = AppError::from(MatchError::MissingInput { field: "title" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response = AppError::Validation("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_field_uses_envelope() {
        let response = AppError::MissingField("job: missing field `title`".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_of(response).await;
        assert_eq!(body["error"]["code"], "MISSING_INPUT");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("title"));
    }

    #[tokio::test]
    async fn test_internal_hides_detail() {
        let response = AppError::from(anyhow::anyhow!("table handle poisoned")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(response).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert!(!body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("poisoned"));
    }
}
