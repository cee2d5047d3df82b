//! [`SqliteStore`] — the SQLite implementation of [`NiceListStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use nicelist_core::{
  Id,
  appeal::{Appeal, NewAppeal},
  infraction::{Infraction, NewInfraction},
  person::{NewPerson, Person},
  store::NiceListStore,
  workflow::{AppealStatus, Judgement},
};

use crate::{
  Error, Result,
  encode::{
    APPEAL_COLUMNS, INFRACTION_COLUMNS, PERSON_COLUMNS, RawAppeal, RawInfraction,
    RawPerson, encode_dt,
  },
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A naughty & nice list backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run a single-statement mutation and return the number of rows it
  /// touched.
  async fn execute(
    &self,
    sql: &'static str,
    params: impl rusqlite::Params + Send + 'static,
  ) -> Result<usize> {
    Ok(self.conn.call(move |conn| Ok(conn.execute(sql, params)?)).await?)
  }

  /// Run an `INSERT … RETURNING id` and return the generated id. The insert
  /// and the id lookup are one statement, so concurrent writers cannot
  /// interleave.
  async fn insert_returning_id(
    &self,
    sql: &'static str,
    params: impl rusqlite::Params + Send + 'static,
  ) -> Result<Id> {
    Ok(
      self
        .conn
        .call(move |conn| Ok(conn.query_row(sql, params, |row| row.get(0))?))
        .await?,
    )
  }

  /// Run raw SQL against the connection, bypassing the typed operations.
  #[cfg(test)]
  pub(crate) async fn execute_raw(&self, sql: &'static str) -> Result<()> {
    self.conn.call(move |conn| Ok(conn.execute_batch(sql)?)).await?;
    Ok(())
  }
}

// ─── NiceListStore impl ──────────────────────────────────────────────────────

impl NiceListStore for SqliteStore {
  type Error = Error;

  // ── People ────────────────────────────────────────────────────────────────

  async fn list_people(&self) -> Result<Vec<Person>> {
    let raws: Vec<RawPerson> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {PERSON_COLUMNS} FROM people ORDER BY checked_at DESC, id DESC"
        ))?;
        let rows = stmt
          .query_map([], RawPerson::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawPerson::into_person).collect()
  }

  async fn get_person(&self, id: Id) -> Result<Option<Person>> {
    let raw: Option<RawPerson> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {PERSON_COLUMNS} FROM people WHERE id = ?1"),
              rusqlite::params![id],
              RawPerson::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawPerson::into_person).transpose()
  }

  async fn add_person(&self, input: NewPerson) -> Result<Id> {
    let checked_at = encode_dt(Utc::now());

    let id = self
      .insert_returning_id(
        "INSERT INTO people (name, is_nice, reason, checked_at)
         VALUES (?1, ?2, ?3, ?4)
         RETURNING id",
        (input.name, input.is_nice, input.reason, checked_at),
      )
      .await?;

    tracing::debug!(person_id = id, "added person");
    Ok(id)
  }

  async fn judge_person(&self, id: Id, judgement: Judgement) -> Result<()> {
    let now = encode_dt(Utc::now());

    // A judgement always moves `checked_at` forward, even within one clock
    // tick of the previous one.
    let changed = self
      .execute(
        "UPDATE people
         SET is_nice = ?1, reason = ?2, checked_at = MAX(?3, checked_at + 1)
         WHERE id = ?4",
        (judgement.is_nice, judgement.reason, now, id),
      )
      .await?;

    if changed == 0 {
      tracing::debug!(person_id = id, "judgement matched no person");
    }
    Ok(())
  }

  async fn delete_person(&self, id: Id) -> Result<()> {
    let changed = self
      .execute("DELETE FROM people WHERE id = ?1", (id,))
      .await?;

    if changed == 0 {
      tracing::debug!(person_id = id, "delete matched no person");
    }
    Ok(())
  }

  // ── Infractions ───────────────────────────────────────────────────────────

  async fn list_infractions_for_person(&self, person_id: Id) -> Result<Vec<Infraction>> {
    let raws: Vec<RawInfraction> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {INFRACTION_COLUMNS} FROM infractions
           WHERE person_id = ?1
           ORDER BY occurred_at DESC, id DESC"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![person_id], RawInfraction::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawInfraction::into_infraction).collect()
  }

  async fn get_infraction(&self, id: Id) -> Result<Option<Infraction>> {
    let raw: Option<RawInfraction> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {INFRACTION_COLUMNS} FROM infractions WHERE id = ?1"),
              rusqlite::params![id],
              RawInfraction::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawInfraction::into_infraction).transpose()
  }

  async fn add_infraction(&self, input: NewInfraction) -> Result<Id> {
    let occurred_at = encode_dt(Utc::now());
    let person_id   = input.person_id;

    let id = self
      .insert_returning_id(
        "INSERT INTO infractions (person_id, description, severity, occurred_at)
         VALUES (?1, ?2, ?3, ?4)
         RETURNING id",
        (
          input.person_id,
          input.description,
          i64::from(input.severity),
          occurred_at,
        ),
      )
      .await?;

    tracing::debug!(infraction_id = id, person_id, "recorded infraction");
    Ok(id)
  }

  // ── Appeals ───────────────────────────────────────────────────────────────

  async fn submit_appeal(&self, input: NewAppeal) -> Result<Id> {
    let submitted_at = encode_dt(Utc::now());

    let id = self
      .insert_returning_id(
        "INSERT INTO appeals (person_id, infraction_id, appeal_text, status, submitted_at)
         VALUES (?1, ?2, ?3, ?4, ?5)
         RETURNING id",
        (
          input.person_id,
          input.infraction_id,
          input.appeal_text,
          AppealStatus::Pending.code(),
          submitted_at,
        ),
      )
      .await?;

    tracing::debug!(appeal_id = id, "submitted appeal");
    Ok(id)
  }

  async fn get_appeal(&self, id: Id) -> Result<Option<Appeal>> {
    let raw: Option<RawAppeal> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {APPEAL_COLUMNS} FROM appeals WHERE id = ?1"),
              rusqlite::params![id],
              RawAppeal::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawAppeal::into_appeal).transpose()
  }

  async fn list_pending_appeals(&self) -> Result<Vec<Appeal>> {
    let pending = AppealStatus::Pending.code();

    let raws: Vec<RawAppeal> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {APPEAL_COLUMNS} FROM appeals
           WHERE status = ?1
           ORDER BY submitted_at DESC, id DESC"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![pending], RawAppeal::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawAppeal::into_appeal).collect()
  }

  async fn review_appeal(&self, id: Id, approved: bool) -> Result<()> {
    let from = AppealStatus::Pending;
    let to   = from.review(approved)?;

    // Only pending rows match, so a reviewed appeal keeps its outcome.
    let changed = self
      .execute(
        "UPDATE appeals SET status = ?1 WHERE id = ?2 AND status = ?3",
        (to.code(), id, from.code()),
      )
      .await?;

    if changed == 0 {
      tracing::debug!(appeal_id = id, "review matched no pending appeal");
    }
    Ok(())
  }
}
