//! Encoding and decoding helpers between Rust domain types and the plain
//! values stored in SQLite columns.
//!
//! Timestamps are stored as integer microseconds since the Unix epoch so they
//! sort natively and can be advanced in SQL. Severity and appeal status are
//! stored as their integer codes.

use chrono::{DateTime, Utc};
use nicelist_core::{
  Id,
  appeal::Appeal,
  infraction::{Infraction, Severity},
  person::Person,
  workflow::AppealStatus,
};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> i64 { dt.timestamp_micros() }

pub fn decode_dt(micros: i64) -> Result<DateTime<Utc>> {
  DateTime::from_timestamp_micros(micros).ok_or(Error::Timestamp(micros))
}

// ─── Row types ───────────────────────────────────────────────────────────────

pub const PERSON_COLUMNS: &str = "id, name, is_nice, reason, checked_at";

/// Raw values read directly from a `people` row.
pub struct RawPerson {
  pub id:         Id,
  pub name:       String,
  pub is_nice:    bool,
  pub reason:     String,
  pub checked_at: i64,
}

impl RawPerson {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      name:       row.get(1)?,
      is_nice:    row.get(2)?,
      reason:     row.get(3)?,
      checked_at: row.get(4)?,
    })
  }

  pub fn into_person(self) -> Result<Person> {
    Ok(Person {
      id:         self.id,
      name:       self.name,
      is_nice:    self.is_nice,
      reason:     self.reason,
      checked_at: decode_dt(self.checked_at)?,
    })
  }
}

pub const INFRACTION_COLUMNS: &str =
  "id, person_id, description, severity, occurred_at";

/// Raw values read directly from an `infractions` row.
pub struct RawInfraction {
  pub id:          Id,
  pub person_id:   Id,
  pub description: String,
  pub severity:    i64,
  pub occurred_at: i64,
}

impl RawInfraction {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      person_id:   row.get(1)?,
      description: row.get(2)?,
      severity:    row.get(3)?,
      occurred_at: row.get(4)?,
    })
  }

  pub fn into_infraction(self) -> Result<Infraction> {
    Ok(Infraction {
      id:          self.id,
      person_id:   self.person_id,
      description: self.description,
      severity:    Severity::try_from(self.severity)?,
      occurred_at: decode_dt(self.occurred_at)?,
    })
  }
}

pub const APPEAL_COLUMNS: &str =
  "id, person_id, infraction_id, appeal_text, status, submitted_at";

/// Raw values read directly from an `appeals` row.
pub struct RawAppeal {
  pub id:            Id,
  pub person_id:     Id,
  pub infraction_id: Id,
  pub appeal_text:   String,
  pub status:        i64,
  pub submitted_at:  i64,
}

impl RawAppeal {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:            row.get(0)?,
      person_id:     row.get(1)?,
      infraction_id: row.get(2)?,
      appeal_text:   row.get(3)?,
      status:        row.get(4)?,
      submitted_at:  row.get(5)?,
    })
  }

  pub fn into_appeal(self) -> Result<Appeal> {
    Ok(Appeal {
      id:            self.id,
      person_id:     self.person_id,
      infraction_id: self.infraction_id,
      appeal_text:   self.appeal_text,
      status:        AppealStatus::try_from(self.status)?,
      submitted_at:  decode_dt(self.submitted_at)?,
    })
  }
}
