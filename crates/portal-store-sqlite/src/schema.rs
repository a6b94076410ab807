//! SQL schema for the Portal SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// `seq` records insertion order and breaks ties between rows sharing a
/// `created_at`. `created_at` is fixed-width RFC 3339 UTC, so comparing the
/// text compares the instants.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Rows are strictly append-only.
-- No UPDATE or DELETE is ever issued against these tables.
CREATE TABLE IF NOT EXISTS contacts (
    seq         INTEGER PRIMARY KEY AUTOINCREMENT,
    id          TEXT NOT NULL UNIQUE,
    name        TEXT NOT NULL,
    email       TEXT NOT NULL,
    subject     TEXT NOT NULL,
    message     TEXT NOT NULL,
    created_at  TEXT NOT NULL      -- ISO 8601 UTC, microseconds
);

CREATE TABLE IF NOT EXISTS registrations (
    seq         INTEGER PRIMARY KEY AUTOINCREMENT,
    id          TEXT NOT NULL UNIQUE,
    full_name   TEXT NOT NULL,
    email       TEXT NOT NULL,
    phone       TEXT NOT NULL,
    course      TEXT NOT NULL,     -- 'web' | 'data' | 'ai' | 'mobile' | 'cloud'
    experience  TEXT NOT NULL,
    created_at  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS contacts_created_idx      ON contacts(created_at, seq);
CREATE INDEX IF NOT EXISTS registrations_created_idx ON registrations(created_at, seq);

PRAGMA user_version = 1;
";
