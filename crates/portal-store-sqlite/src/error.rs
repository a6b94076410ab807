//! Error type for `portal-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// A stored course code that no longer maps to a known course.
  #[error("unknown course code: {0:?}")]
  UnknownCourse(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
