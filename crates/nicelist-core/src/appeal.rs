//! Appeal — a request to overturn an infraction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Id, workflow::AppealStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appeal {
  pub id:            Id,
  pub person_id:     Id,
  pub infraction_id: Id,
  pub appeal_text:   String,
  pub status:        AppealStatus,
  pub submitted_at:  DateTime<Utc>,
}

/// Input to [`crate::store::NiceListStore::submit_appeal`].
/// New appeals always start [`AppealStatus::Pending`].
#[derive(Debug, Clone)]
pub struct NewAppeal {
  pub person_id:     Id,
  pub infraction_id: Id,
  pub appeal_text:   String,
}
