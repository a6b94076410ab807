//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::{JsonRejection, QueryRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use portal_core::FieldErrors;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("submission rejected")]
  Rejected(FieldErrors),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<portal_core::Error> for ApiError {
  fn from(e: portal_core::Error) -> Self {
    match e {
      portal_core::Error::Validation(errors) => Self::Rejected(errors),
      portal_core::Error::InvalidArgument(m) => Self::BadRequest(m),
      portal_core::Error::Storage(e) => Self::Store(e),
    }
  }
}

// Extractor rejections keep the JSON error shape instead of axum's plain text.

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self { Self::BadRequest(rejection.body_text()) }
}

impl From<QueryRejection> for ApiError {
  fn from(rejection: QueryRejection) -> Self { Self::BadRequest(rejection.body_text()) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::BadRequest(m) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "error": m }))).into_response()
      }
      ApiError::Rejected(errors) => {
        (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "errors": errors })))
          .into_response()
      }
      ApiError::Store(e) => {
        // Details stay in the server log.
        tracing::error!(error = %e, "store failure while serving API request");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(json!({ "error": "internal error" })),
        )
          .into_response()
      }
    }
  }
}
