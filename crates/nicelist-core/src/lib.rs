//! Core types and trait definitions for the naughty & nice list.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod appeal;
pub mod error;
pub mod infraction;
pub mod person;
pub mod store;
pub mod workflow;

pub use error::{Error, Result};

use serde::{Deserialize, Serialize};

/// Storage-assigned row identifier shared by all three entities.
pub type Id = i64;

/// Response envelope for operations that create a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Created {
  pub id: Id,
}

/// Response envelope for mutations that return nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
  pub ok: bool,
}

impl Ack {
  pub fn ok() -> Self { Self { ok: true } }
}
