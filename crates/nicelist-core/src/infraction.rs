//! Infraction — an immutable record of naughty behaviour.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Id, Result};

// ─── Severity ────────────────────────────────────────────────────────────────

/// How bad an infraction was, from 1 (minor) to 5 (coal).
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "i64", try_from = "i64")]
pub struct Severity(u8);

impl Severity {
  pub const MIN: Self = Self(1);
  pub const MAX: Self = Self(5);

  pub fn get(self) -> u8 { self.0 }
}

impl Default for Severity {
  fn default() -> Self { Self::MIN }
}

impl TryFrom<i64> for Severity {
  type Error = Error;

  fn try_from(value: i64) -> Result<Self> {
    if (i64::from(Self::MIN.0)..=i64::from(Self::MAX.0)).contains(&value) {
      Ok(Self(value as u8))
    } else {
      Err(Error::SeverityOutOfRange(value))
    }
  }
}

impl From<Severity> for i64 {
  fn from(s: Severity) -> Self { i64::from(s.0) }
}

// ─── Infraction ──────────────────────────────────────────────────────────────

/// Never updated once written; removed only when its person is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Infraction {
  pub id:          Id,
  pub person_id:   Id,
  pub description: String,
  pub severity:    Severity,
  pub occurred_at: DateTime<Utc>,
}

/// Input to [`crate::store::NiceListStore::add_infraction`].
#[derive(Debug, Clone)]
pub struct NewInfraction {
  pub person_id:   Id,
  pub description: String,
  pub severity:    Severity,
}

impl NewInfraction {
  pub fn new(person_id: Id, description: impl Into<String>) -> Self {
    Self {
      person_id,
      description: description.into(),
      severity: Severity::default(),
    }
  }
}
