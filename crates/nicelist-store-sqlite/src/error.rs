//! Error type for `nicelist-store-sqlite`.

use nicelist_core::store::StoreError;
use rusqlite::ffi;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] nicelist_core::Error),

  #[error("database error: {0}")]
  Database(#[source] tokio_rusqlite::Error),

  /// An insert named a person or infraction that does not exist.
  #[error("referenced person or infraction does not exist")]
  MissingReference,

  #[error("stored timestamp out of range: {0}")]
  Timestamp(i64),
}

impl From<tokio_rusqlite::Error> for Error {
  fn from(e: tokio_rusqlite::Error) -> Self {
    if let tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(ref failure, _)) = e
      && failure.extended_code == ffi::SQLITE_CONSTRAINT_FOREIGNKEY
    {
      return Error::MissingReference;
    }
    Error::Database(e)
  }
}

impl StoreError for Error {
  fn is_missing_reference(&self) -> bool { matches!(self, Self::MissingReference) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
