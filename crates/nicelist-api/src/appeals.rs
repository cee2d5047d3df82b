//! Handlers for `/appeals` endpoints.
//!
//! | Method  | Path | Notes |
//! |---------|------|-------|
//! | `POST`  | `/appeals` | Body: [`SubmitBody`]; returns 201 + `{"id":..}` |
//! | `GET`   | `/appeals/pending` | Awaiting review, most recent first |
//! | `GET`   | `/appeals/:id` | 404 if not found |
//! | `PATCH` | `/appeals/:id/review` | Body: `{"approved":true}` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State, rejection::{JsonRejection, PathRejection}},
  http::StatusCode,
  response::IntoResponse,
};
use nicelist_core::{
  Ack, Created, Id,
  appeal::{Appeal, NewAppeal},
  store::NiceListStore,
};
use serde::Deserialize;

use crate::{error::ApiError, required_text};

// ─── Submit ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitBody {
  pub person_id:     Option<Id>,
  pub infraction_id: Option<Id>,
  pub appeal_text:   Option<String>,
}

/// `POST /appeals` — returns 422 if the person or infraction does not exist.
pub async fn submit<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<SubmitBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: NiceListStore,
{
  let Json(body) = body?;
  let (Some(person_id), Some(infraction_id)) = (body.person_id, body.infraction_id) else {
    return Err(ApiError::BadRequest(
      "personId and infractionId are required".to_string(),
    ));
  };
  let input = NewAppeal {
    person_id,
    infraction_id,
    appeal_text: required_text(body.appeal_text, "appealText")?,
  };

  let id = store.submit_appeal(input).await.map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(Created { id })))
}

// ─── Reads ────────────────────────────────────────────────────────────────────

/// `GET /appeals/pending`
pub async fn pending<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Appeal>>, ApiError>
where
  S: NiceListStore,
{
  let appeals = store
    .list_pending_appeals()
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(appeals))
}

/// `GET /appeals/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  path: Result<Path<Id>, PathRejection>,
) -> Result<Json<Appeal>, ApiError>
where
  S: NiceListStore,
{
  let Path(id) = path?;
  let appeal = store
    .get_appeal(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("appeal {id} not found")))?;
  Ok(Json(appeal))
}

// ─── Review ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ReviewBody {
  pub approved: Option<bool>,
}

/// `PATCH /appeals/:id/review` — body: `{"approved":true}`
///
/// Reports success whether or not a pending appeal with that id exists.
pub async fn review<S>(
  State(store): State<Arc<S>>,
  path: Result<Path<Id>, PathRejection>,
  body: Result<Json<ReviewBody>, JsonRejection>,
) -> Result<Json<Ack>, ApiError>
where
  S: NiceListStore,
{
  let Path(id) = path?;
  let Json(body) = body?;
  let approved = body
    .approved
    .ok_or_else(|| ApiError::BadRequest("approved must be a boolean".to_string()))?;

  store
    .review_appeal(id, approved)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(Ack::ok()))
}
