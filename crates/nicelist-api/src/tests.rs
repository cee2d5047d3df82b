//! Router tests against an in-memory SQLite store and a failing store.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode, header},
};
use nicelist_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::router;

async fn app() -> Router {
  let store = SqliteStore::open_in_memory().await.unwrap();
  router(Arc::new(store))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
  let mut builder = Request::builder().method(method).uri(uri);
  let body = match body {
    Some(v) => {
      builder = builder.header(header::CONTENT_TYPE, "application/json");
      Body::from(v.to_string())
    }
    None => Body::empty(),
  };
  let resp = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
  let status = resp.status();
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
  (status, json)
}

async fn create_person(app: &Router, name: &str) -> i64 {
  let (status, body) = send(app, "POST", "/api/people", Some(json!({ "name": name }))).await;
  assert_eq!(status, StatusCode::CREATED);
  body["id"].as_i64().unwrap()
}

async fn create_infraction(app: &Router, person_id: i64) -> i64 {
  let (status, body) = send(
    app,
    "POST",
    &format!("/api/people/{person_id}/infractions"),
    Some(json!({ "description": "stole cookies", "severity": 3 })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  body["id"].as_i64().unwrap()
}

// ── Usage page ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn root_serves_usage_text() {
  let app = app().await;
  let req = Request::builder().uri("/").body(Body::empty()).unwrap();
  let resp = app.oneshot(req).await.unwrap();
  assert_eq!(resp.status(), StatusCode::OK);
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  let text = String::from_utf8(bytes.to_vec()).unwrap();
  assert!(text.contains("/api/appeals/pending"));
}

// ── People ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_then_get_person() {
  let app = app().await;
  let id = create_person(&app, "  Candy Cane ").await;

  let (status, body) = send(&app, "GET", &format!("/api/people/{id}"), None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["name"], "Candy Cane");
  assert_eq!(body["isNice"], true);
  assert_eq!(body["reason"], "");
  assert!(body["checkedAt"].is_string());
}

#[tokio::test]
async fn create_person_requires_name() {
  let app = app().await;
  let (status, body) = send(&app, "POST", "/api/people", Some(json!({ "name": "   " }))).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], "name is required");

  let (status, _) = send(&app, "POST", "/api/people", Some(json!({}))).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
  let app = app().await;
  let req = Request::builder()
    .method("POST")
    .uri("/api/people")
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from("{not json"))
    .unwrap();
  let resp = app.oneshot(req).await.unwrap();
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_person_is_404_and_bad_id_is_400() {
  let app = app().await;
  let (status, _) = send(&app, "GET", "/api/people/9999", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);

  let (status, body) = send(&app, "GET", "/api/people/abc", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], "invalid id");
}

#[tokio::test]
async fn judge_person_updates_verdict() {
  let app = app().await;
  let id = create_person(&app, "Tim").await;

  let (status, body) = send(
    &app,
    "PATCH",
    &format!("/api/people/{id}"),
    Some(json!({ "isNice": false, "reason": "stole candy" })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!({ "ok": true }));

  let (_, person) = send(&app, "GET", &format!("/api/people/{id}"), None).await;
  assert_eq!(person["isNice"], false);
  assert_eq!(person["reason"], "stole candy");
}

#[tokio::test]
async fn judge_requires_boolean_verdict() {
  let app = app().await;
  let id = create_person(&app, "Tim").await;

  let (status, body) =
    send(&app, "PATCH", &format!("/api/people/{id}"), Some(json!({ "reason": "?" }))).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], "isNice must be a boolean");

  let (status, _) =
    send(&app, "PATCH", &format!("/api/people/{id}"), Some(json!({ "isNice": "yes" }))).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (status, _) = send(
    &app,
    "PATCH",
    &format!("/api/people/{id}"),
    Some(json!({ "isNice": false, "reason": 5 })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (_, person) = send(&app, "GET", &format!("/api/people/{id}"), None).await;
  assert_eq!(person["isNice"], true);
}

#[tokio::test]
async fn mutations_on_missing_ids_report_ok() {
  let app = app().await;

  let (status, body) =
    send(&app, "PATCH", "/api/people/9999", Some(json!({ "isNice": true }))).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["ok"], true);

  let (status, _) = send(&app, "DELETE", "/api/people/9999", None).await;
  assert_eq!(status, StatusCode::OK);

  let (status, _) =
    send(&app, "PATCH", "/api/appeals/9999/review", Some(json!({ "approved": true }))).await;
  assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn delete_person_cascades() {
  let app = app().await;
  let id = create_person(&app, "Tim").await;
  let inf = create_infraction(&app, id).await;
  send(
    &app,
    "POST",
    "/api/appeals",
    Some(json!({ "personId": id, "infractionId": inf, "appealText": "sorry" })),
  )
  .await;

  let (status, _) = send(&app, "DELETE", &format!("/api/people/{id}"), None).await;
  assert_eq!(status, StatusCode::OK);

  let (_, infractions) =
    send(&app, "GET", &format!("/api/people/{id}/infractions"), None).await;
  assert_eq!(infractions, json!([]));
  let (_, pending) = send(&app, "GET", "/api/appeals/pending", None).await;
  assert_eq!(pending, json!([]));
}

// ── Infractions ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn record_and_list_infractions() {
  let app = app().await;
  let id = create_person(&app, "Tim").await;
  let inf = create_infraction(&app, id).await;

  let (status, body) = send(&app, "GET", &format!("/api/people/{id}/infractions"), None).await;
  assert_eq!(status, StatusCode::OK);
  let list = body.as_array().unwrap();
  assert_eq!(list.len(), 1);
  assert_eq!(list[0]["id"], inf);
  assert_eq!(list[0]["personId"], id);
  assert_eq!(list[0]["severity"], 3);
  assert!(list[0]["occurredAt"].is_string());
}

#[tokio::test]
async fn infraction_validation() {
  let app = app().await;
  let id = create_person(&app, "Tim").await;
  let uri = format!("/api/people/{id}/infractions");

  let (status, _) = send(&app, "POST", &uri, Some(json!({ "severity": 2 }))).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (status, _) =
    send(&app, "POST", &uri, Some(json!({ "description": "x", "severity": 6 }))).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (status, _) = send(&app, "POST", &uri, Some(json!({ "description": "x" }))).await;
  assert_eq!(status, StatusCode::CREATED);
  let (_, body) = send(&app, "GET", &uri, None).await;
  assert_eq!(body[0]["severity"], 1);
}

#[tokio::test]
async fn infraction_for_missing_person_is_rejected() {
  let app = app().await;
  let (status, body) = send(
    &app,
    "POST",
    "/api/people/9999/infractions",
    Some(json!({ "description": "ghost deed" })),
  )
  .await;
  assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
  assert!(body["error"].is_string());
}

// ── Appeals ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn appeal_workflow() {
  let app = app().await;
  let id = create_person(&app, "Tim").await;
  let inf = create_infraction(&app, id).await;

  let (status, body) = send(
    &app,
    "POST",
    "/api/appeals",
    Some(json!({ "personId": id, "infractionId": inf, "appealText": "I was borrowing them" })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  let appeal_id = body["id"].as_i64().unwrap();

  let (_, pending) = send(&app, "GET", "/api/appeals/pending", None).await;
  assert_eq!(pending[0]["id"], appeal_id);
  assert_eq!(pending[0]["status"], 0);

  let (status, _) = send(
    &app,
    "PATCH",
    &format!("/api/appeals/{appeal_id}/review"),
    Some(json!({ "approved": true })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);

  let (_, pending) = send(&app, "GET", "/api/appeals/pending", None).await;
  assert_eq!(pending, json!([]));
  let (_, appeal) = send(&app, "GET", &format!("/api/appeals/{appeal_id}"), None).await;
  assert_eq!(appeal["status"], 1);
}

#[tokio::test]
async fn appeal_validation_and_references() {
  let app = app().await;
  let id = create_person(&app, "Tim").await;

  let (status, _) =
    send(&app, "POST", "/api/appeals", Some(json!({ "personId": id, "appealText": "hi" }))).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (status, _) = send(
    &app,
    "POST",
    "/api/appeals",
    Some(json!({ "personId": id, "infractionId": 1, "appealText": "  " })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (status, _) = send(
    &app,
    "POST",
    "/api/appeals",
    Some(json!({ "personId": id, "infractionId": 9999, "appealText": "hi" })),
  )
  .await;
  assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

  let (status, body) =
    send(&app, "PATCH", "/api/appeals/1/review", Some(json!({}))).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], "approved must be a boolean");

  let (status, _) = send(&app, "GET", "/api/appeals/9999", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

// ── Storage failures ─────────────────────────────────────────────────────────

mod offline {
  use nicelist_core::{
    Id,
    appeal::{Appeal, NewAppeal},
    infraction::{Infraction, NewInfraction},
    person::{NewPerson, Person},
    store::{NiceListStore, StoreError},
    workflow::Judgement,
  };

  #[derive(Debug, thiserror::Error)]
  #[error("database is offline")]
  pub struct Offline;

  impl StoreError for Offline {
    fn is_missing_reference(&self) -> bool { false }
  }

  /// A store whose every call fails as if the database were unreachable.
  pub struct OfflineStore;

  impl NiceListStore for OfflineStore {
    type Error = Offline;

    async fn list_people(&self) -> Result<Vec<Person>, Offline> { Err(Offline) }
    async fn get_person(&self, _: Id) -> Result<Option<Person>, Offline> { Err(Offline) }
    async fn add_person(&self, _: NewPerson) -> Result<Id, Offline> { Err(Offline) }
    async fn judge_person(&self, _: Id, _: Judgement) -> Result<(), Offline> { Err(Offline) }
    async fn delete_person(&self, _: Id) -> Result<(), Offline> { Err(Offline) }
    async fn list_infractions_for_person(&self, _: Id) -> Result<Vec<Infraction>, Offline> { Err(Offline) }
    async fn get_infraction(&self, _: Id) -> Result<Option<Infraction>, Offline> { Err(Offline) }
    async fn add_infraction(&self, _: NewInfraction) -> Result<Id, Offline> { Err(Offline) }
    async fn submit_appeal(&self, _: NewAppeal) -> Result<Id, Offline> { Err(Offline) }
    async fn get_appeal(&self, _: Id) -> Result<Option<Appeal>, Offline> { Err(Offline) }
    async fn list_pending_appeals(&self) -> Result<Vec<Appeal>, Offline> { Err(Offline) }
    async fn review_appeal(&self, _: Id, _: bool) -> Result<(), Offline> { Err(Offline) }
  }
}

#[tokio::test]
async fn storage_failures_are_500_not_silent_success() {
  let app = router(Arc::new(offline::OfflineStore));

  let cases = [
    ("GET", "/api/people", None),
    ("GET", "/api/people/1", None),
    ("POST", "/api/people", Some(json!({ "name": "Tim" }))),
    ("PATCH", "/api/people/1", Some(json!({ "isNice": false }))),
    ("DELETE", "/api/people/1", None),
    ("GET", "/api/people/1/infractions", None),
    ("POST", "/api/people/1/infractions", Some(json!({ "description": "deed" }))),
    (
      "POST",
      "/api/appeals",
      Some(json!({ "personId": 1, "infractionId": 1, "appealText": "sorry" })),
    ),
    ("GET", "/api/appeals/pending", None),
    ("GET", "/api/appeals/1", None),
    ("PATCH", "/api/appeals/1/review", Some(json!({ "approved": true }))),
  ];

  for (method, uri, body) in cases {
    let (status, body) = send(&app, method, uri, body).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{method} {uri}");
    assert_eq!(body["error"], "database is offline", "{method} {uri}");
  }
}
