//! Error types for `nicelist-core`.

use thiserror::Error;

use crate::workflow::AppealStatus;

#[derive(Debug, Error)]
pub enum Error {
  #[error("severity must be between 1 and 5, got {0}")]
  SeverityOutOfRange(i64),

  #[error("unknown appeal status code: {0}")]
  UnknownAppealStatus(i64),

  #[error("appeal already reviewed as {0:?}")]
  AppealAlreadyReviewed(AppealStatus),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
