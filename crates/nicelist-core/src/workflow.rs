//! Workflow rules: person judgements and the appeal review state machine.
//!
//! An appeal starts [`AppealStatus::Pending`] and is reviewed exactly once,
//! landing in either [`AppealStatus::Approved`] or [`AppealStatus::Denied`].
//! Both outcomes are terminal.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Judgement ───────────────────────────────────────────────────────────────

/// A verdict on a person. Applying one overwrites both fields and advances
/// the person's `checked_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Judgement {
  pub is_nice: bool,
  /// Why the verdict was reached. Omitted reasons are stored as `""`.
  #[serde(default)]
  pub reason:  String,
}

impl Judgement {
  pub fn new(is_nice: bool, reason: Option<String>) -> Self {
    Self { is_nice, reason: reason.unwrap_or_default() }
  }
}

// ─── Appeal status ───────────────────────────────────────────────────────────

/// Review status of an appeal. Serialised as its integer code.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(into = "i64", try_from = "i64")]
pub enum AppealStatus {
  #[default]
  Pending,
  Approved,
  Denied,
}

impl AppealStatus {
  /// The integer stored in the `status` column.
  pub fn code(self) -> i64 {
    match self {
      Self::Pending => 0,
      Self::Approved => 1,
      Self::Denied => 2,
    }
  }

  pub fn is_terminal(self) -> bool { !matches!(self, Self::Pending) }

  /// The status a review moves this appeal to.
  ///
  /// Only a pending appeal may be reviewed.
  pub fn review(self, approved: bool) -> Result<Self> {
    if self.is_terminal() {
      return Err(Error::AppealAlreadyReviewed(self));
    }
    Ok(if approved { Self::Approved } else { Self::Denied })
  }
}

impl From<AppealStatus> for i64 {
  fn from(status: AppealStatus) -> Self { status.code() }
}

impl TryFrom<i64> for AppealStatus {
  type Error = Error;

  fn try_from(code: i64) -> Result<Self> {
    match code {
      0 => Ok(Self::Pending),
      1 => Ok(Self::Approved),
      2 => Ok(Self::Denied),
      other => Err(Error::UnknownAppealStatus(other)),
    }
  }
}
