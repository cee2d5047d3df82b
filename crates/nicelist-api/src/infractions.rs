//! Handlers for `/people/:id/infractions`.
//!
//! Infractions are append-only: there is no update or delete endpoint.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State, rejection::{JsonRejection, PathRejection}},
  http::StatusCode,
  response::IntoResponse,
};
use nicelist_core::{
  Created, Id,
  infraction::{Infraction, NewInfraction, Severity},
  store::NiceListStore,
};
use serde::Deserialize;

use crate::{error::ApiError, required_text};

/// `GET /people/:id/infractions` — most recent first; empty for unknown people.
pub async fn list<S>(
  State(store): State<Arc<S>>,
  path: Result<Path<Id>, PathRejection>,
) -> Result<Json<Vec<Infraction>>, ApiError>
where
  S: NiceListStore,
{
  let Path(person_id) = path?;
  let infractions = store
    .list_infractions_for_person(person_id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(infractions))
}

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub description: Option<String>,
  /// 1 (minor) to 5; defaults to 1.
  pub severity:    Option<i64>,
}

/// `POST /people/:id/infractions` — body: `{"description":"...","severity":3}`
///
/// Returns 422 if the person does not exist.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  path: Result<Path<Id>, PathRejection>,
  body: Result<Json<CreateBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: NiceListStore,
{
  let Path(person_id) = path?;
  let Json(body) = body?;

  let severity = match body.severity {
    Some(raw) => Severity::try_from(raw).map_err(|e| ApiError::BadRequest(e.to_string()))?,
    None => Severity::default(),
  };
  let input = NewInfraction {
    person_id,
    description: required_text(body.description, "description")?,
    severity,
  };

  let id = store.add_infraction(input).await.map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(Created { id })))
}
