//! JSON REST API for the naughty & nice list.
//!
//! Exposes an axum [`Router`] backed by any [`NiceListStore`]. Transport
//! concerns (binding, tracing layers) are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", nicelist_api::api_router(store.clone()))
//! ```
//!
//! or use [`router`], which adds the usage page at `/` as well.

pub mod appeals;
pub mod error;
pub mod help;
pub mod infractions;
pub mod people;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, patch, post},
};
use nicelist_core::store::NiceListStore;

pub use error::ApiError;

/// Build the `/api` routes for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: NiceListStore + 'static,
{
  Router::new()
    // People
    .route("/people", get(people::list::<S>).post(people::create::<S>))
    .route(
      "/people/{id}",
      get(people::get_one::<S>)
        .patch(people::judge::<S>)
        .delete(people::delete_one::<S>),
    )
    // Infractions
    .route(
      "/people/{id}/infractions",
      get(infractions::list::<S>).post(infractions::create::<S>),
    )
    // Appeals
    .route("/appeals", post(appeals::submit::<S>))
    .route("/appeals/pending", get(appeals::pending::<S>))
    .route("/appeals/{id}", get(appeals::get_one::<S>))
    .route("/appeals/{id}/review", patch(appeals::review::<S>))
    .with_state(store)
}

/// The full application: usage page at `/` and the API under `/api`.
pub fn router<S>(store: Arc<S>) -> Router<()>
where
  S: NiceListStore + 'static,
{
  Router::new()
    .route("/", get(help::handler))
    .nest("/api", api_router(store))
}

/// Trim a required text field, rejecting it when absent or blank.
pub(crate) fn required_text(value: Option<String>, field: &str) -> Result<String, ApiError> {
  value
    .map(|v| v.trim().to_owned())
    .filter(|v| !v.is_empty())
    .ok_or_else(|| ApiError::BadRequest(format!("{field} is required")))
}

#[cfg(test)]
mod tests;
