//! Error types and axum `IntoResponse` implementation.
//!
//! Every variant renders as a small HTML page. Store failures are logged and
//! shown to the visitor only as a generic message.

use axum::{
  http::{HeaderValue, StatusCode, header},
  response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::render;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unauthorized")]
  Unauthorized,
  #[error("bad request: {0}")]
  BadRequest(String),
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<portal_core::Error> for Error {
  fn from(e: portal_core::Error) -> Self {
    match e {
      // Handlers redisplay their forms on validation failure; one that
      // reaches here is reported like any other bad input.
      portal_core::Error::Validation(errors) => {
        Error::BadRequest(format!("{} field(s) failed validation", errors.len()))
      }
      portal_core::Error::InvalidArgument(m) => Error::BadRequest(m),
      portal_core::Error::Storage(e) => Error::Store(e),
    }
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::Unauthorized => {
        let mut res = (
          StatusCode::UNAUTHORIZED,
          Html(render::error_page("Unauthorized", "Sign in to view this page.")),
        )
          .into_response();
        res.headers_mut().insert(
          header::WWW_AUTHENTICATE,
          HeaderValue::from_static("Basic realm=\"portal\""),
        );
        res
      }
      Error::BadRequest(msg) => (
        StatusCode::BAD_REQUEST,
        Html(render::error_page("Bad Request", &msg)),
      )
        .into_response(),
      Error::Store(e) => {
        tracing::error!(error = %e, "store failure while serving page");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Html(render::error_page(
            "Something went wrong",
            "We could not complete your request. Please try again later.",
          )),
        )
          .into_response()
      }
    }
  }
}
