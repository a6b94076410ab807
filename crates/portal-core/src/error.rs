//! Error types for `portal-core`.

use thiserror::Error;

use crate::validate::FieldErrors;

#[derive(Debug, Error)]
pub enum Error {
  /// The submission failed validation; nothing was written.
  #[error("validation failed on {} field(s)", .0.len())]
  Validation(FieldErrors),

  /// A listing argument was out of range; the store was not consulted.
  #[error("invalid argument: {0}")]
  InvalidArgument(String),

  #[error("storage error: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub(crate) fn storage<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Storage(Box::new(e))
  }

  /// The field errors, if this is a validation failure.
  pub fn field_errors(&self) -> Option<&FieldErrors> {
    match self {
      Self::Validation(errors) => Some(errors),
      _ => None,
    }
  }
}

impl From<FieldErrors> for Error {
  fn from(errors: FieldErrors) -> Self { Self::Validation(errors) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
