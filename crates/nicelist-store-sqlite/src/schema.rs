//! SQL schema for the naughty & nice list.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// Timestamps are integer microseconds since the Unix epoch.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS people (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT    NOT NULL,
    is_nice     INTEGER NOT NULL DEFAULT 1,
    reason      TEXT    NOT NULL DEFAULT '',
    checked_at  INTEGER NOT NULL
);

-- Infractions are never updated; they disappear only with their person.
CREATE TABLE IF NOT EXISTS infractions (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    person_id   INTEGER NOT NULL REFERENCES people(id) ON DELETE CASCADE,
    description TEXT    NOT NULL,
    severity    INTEGER NOT NULL DEFAULT 1 CHECK (severity BETWEEN 1 AND 5),
    occurred_at INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS appeals (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    person_id     INTEGER NOT NULL REFERENCES people(id) ON DELETE CASCADE,
    infraction_id INTEGER NOT NULL REFERENCES infractions(id) ON DELETE CASCADE,
    appeal_text   TEXT    NOT NULL,
    status        INTEGER NOT NULL DEFAULT 0 CHECK (status IN (0, 1, 2)), -- pending | approved | denied
    submitted_at  INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS people_checked_idx     ON people(checked_at);
CREATE INDEX IF NOT EXISTS infractions_person_idx ON infractions(person_id);
CREATE INDEX IF NOT EXISTS appeals_person_idx     ON appeals(person_id);
CREATE INDEX IF NOT EXISTS appeals_infraction_idx ON appeals(infraction_id);
CREATE INDEX IF NOT EXISTS appeals_status_idx     ON appeals(status, submitted_at);

PRAGMA user_version = 1;
";
