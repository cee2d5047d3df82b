//! The `NiceListStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `nicelist-store-sqlite`). The HTTP layer depends on this abstraction, not on
//! any concrete backend.

use std::future::Future;

use crate::{
  Id,
  appeal::{Appeal, NewAppeal},
  infraction::{Infraction, NewInfraction},
  person::{NewPerson, Person},
  workflow::Judgement,
};

/// Errors a backend may return.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  /// `true` when a write was rejected because a row it references (a person
  /// or an infraction) does not exist.
  fn is_missing_reference(&self) -> bool;
}

/// Abstraction over a naughty & nice list backend.
///
/// Mutations addressed at an id that matches no row (`judge_person`,
/// `delete_person`, `review_appeal`) succeed without doing anything; only
/// reads report absence, as `None`.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait NiceListStore: Send + Sync {
  type Error: StoreError;

  // ── People ────────────────────────────────────────────────────────────

  /// All people, most recently judged first.
  fn list_people(
    &self,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + '_;

  /// Retrieve a person by id. Returns `None` if not found.
  fn get_person(
    &self,
    id: Id,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  /// Persist a new person and return the generated id. `checked_at` is set
  /// by the store.
  fn add_person(
    &self,
    input: NewPerson,
  ) -> impl Future<Output = Result<Id, Self::Error>> + Send + '_;

  /// Overwrite a person's judgement and advance their `checked_at`.
  fn judge_person(
    &self,
    id: Id,
    judgement: Judgement,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Delete a person together with their infractions and appeals.
  fn delete_person(
    &self,
    id: Id,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Infractions ───────────────────────────────────────────────────────

  /// A person's infractions, most recent first. Empty for unknown people.
  fn list_infractions_for_person(
    &self,
    person_id: Id,
  ) -> impl Future<Output = Result<Vec<Infraction>, Self::Error>> + Send + '_;

  fn get_infraction(
    &self,
    id: Id,
  ) -> impl Future<Output = Result<Option<Infraction>, Self::Error>> + Send + '_;

  /// Record an infraction and return the generated id.
  ///
  /// Fails with a missing-reference error if the person does not exist.
  fn add_infraction(
    &self,
    input: NewInfraction,
  ) -> impl Future<Output = Result<Id, Self::Error>> + Send + '_;

  // ── Appeals ───────────────────────────────────────────────────────────

  /// Submit a pending appeal and return the generated id.
  ///
  /// Fails with a missing-reference error if the person or the infraction
  /// does not exist.
  fn submit_appeal(
    &self,
    input: NewAppeal,
  ) -> impl Future<Output = Result<Id, Self::Error>> + Send + '_;

  fn get_appeal(
    &self,
    id: Id,
  ) -> impl Future<Output = Result<Option<Appeal>, Self::Error>> + Send + '_;

  /// Appeals still awaiting review, most recently submitted first.
  fn list_pending_appeals(
    &self,
  ) -> impl Future<Output = Result<Vec<Appeal>, Self::Error>> + Send + '_;

  /// Approve or deny a pending appeal. Appeals that were already reviewed
  /// keep their outcome.
  fn review_appeal(
    &self,
    id: Id,
    approved: bool,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
