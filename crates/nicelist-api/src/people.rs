//! Handlers for `/people` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/people` | Most recently judged first |
//! | `POST`   | `/people` | Body: [`CreateBody`]; returns 201 + `{"id":..}` |
//! | `GET`    | `/people/:id` | 404 if not found |
//! | `PATCH`  | `/people/:id` | Body: [`JudgeBody`]; returns `{"ok":true}` |
//! | `DELETE` | `/people/:id` | Cascades to infractions and appeals |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State, rejection::{JsonRejection, PathRejection}},
  http::StatusCode,
  response::IntoResponse,
};
use nicelist_core::{
  Ack, Created, Id,
  person::{NewPerson, Person},
  store::NiceListStore,
  workflow::Judgement,
};
use serde::Deserialize;

use crate::{error::ApiError, required_text};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /people`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Person>>, ApiError>
where
  S: NiceListStore,
{
  let people = store.list_people().await.map_err(ApiError::from_store)?;
  Ok(Json(people))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /people/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  path: Result<Path<Id>, PathRejection>,
) -> Result<Json<Person>, ApiError>
where
  S: NiceListStore,
{
  let Path(id) = path?;
  let person = store
    .get_person(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("person {id} not found")))?;
  Ok(Json(person))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBody {
  pub name:    Option<String>,
  /// Defaults to `true`.
  pub is_nice: Option<bool>,
  pub reason:  Option<String>,
}

/// `POST /people` — body: `{"name":"...","isNice":true,"reason":"..."}`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<CreateBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: NiceListStore,
{
  let Json(body) = body?;
  let input = NewPerson {
    name:    required_text(body.name, "name")?,
    is_nice: body.is_nice.unwrap_or(true),
    reason:  body.reason.unwrap_or_default(),
  };

  let id = store.add_person(input).await.map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(Created { id })))
}

// ─── Judge ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeBody {
  pub is_nice: Option<bool>,
  pub reason:  Option<String>,
}

/// `PATCH /people/:id` — body: `{"isNice":false,"reason":"..."}`
///
/// Reports success whether or not the person exists.
pub async fn judge<S>(
  State(store): State<Arc<S>>,
  path: Result<Path<Id>, PathRejection>,
  body: Result<Json<JudgeBody>, JsonRejection>,
) -> Result<Json<Ack>, ApiError>
where
  S: NiceListStore,
{
  let Path(id) = path?;
  let Json(body) = body?;
  let is_nice = body
    .is_nice
    .ok_or_else(|| ApiError::BadRequest("isNice must be a boolean".to_string()))?;

  store
    .judge_person(id, Judgement::new(is_nice, body.reason))
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(Ack::ok()))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /people/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  path: Result<Path<Id>, PathRejection>,
) -> Result<Json<Ack>, ApiError>
where
  S: NiceListStore,
{
  let Path(id) = path?;
  store.delete_person(id).await.map_err(ApiError::from_store)?;
  Ok(Json(Ack::ok()))
}
