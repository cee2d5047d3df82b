//! Person — someone on the list, currently judged nice or naughty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Id;

/// A person and their current judgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
  pub id:         Id,
  /// Set at creation; never changed afterwards.
  pub name:       String,
  pub is_nice:    bool,
  pub reason:     String,
  /// When the person was last judged. Strictly increases with every
  /// judgement.
  pub checked_at: DateTime<Utc>,
}

/// Input to [`crate::store::NiceListStore::add_person`].
/// `id` and `checked_at` are always set by the store.
#[derive(Debug, Clone)]
pub struct NewPerson {
  pub name:    String,
  pub is_nice: bool,
  pub reason:  String,
}

impl NewPerson {
  /// A person with the default judgement: nice, no reason given.
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into(), is_nice: true, reason: String::new() }
  }
}
