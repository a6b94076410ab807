//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings with a fixed microsecond
//! fraction and a `Z` suffix. UUIDs are stored as hyphenated lowercase
//! strings. Courses are stored by code.

use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use portal_core::entity::{
  Contact, ContactId, Course, Registration, RegistrationId,
};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Course ───────────────────────────────────────────────────────────────────

pub fn decode_course(s: &str) -> Result<Course> {
  Course::from_str(s).map_err(|_| Error::UnknownCourse(s.to_owned()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column list shared by every `contacts` query; matches [`RawContact::from_row`].
pub const CONTACT_COLUMNS: &str = "id, name, email, subject, message, created_at";

/// Column list shared by every `registrations` query.
pub const REGISTRATION_COLUMNS: &str =
  "id, full_name, email, phone, course, experience, created_at";

/// Raw strings read directly from a `contacts` row.
pub struct RawContact {
  pub id:         String,
  pub name:       String,
  pub email:      String,
  pub subject:    String,
  pub message:    String,
  pub created_at: String,
}

impl RawContact {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      name:       row.get(1)?,
      email:      row.get(2)?,
      subject:    row.get(3)?,
      message:    row.get(4)?,
      created_at: row.get(5)?,
    })
  }

  pub fn into_contact(self) -> Result<Contact> {
    Ok(Contact {
      id:         ContactId(decode_uuid(&self.id)?),
      name:       self.name,
      email:      self.email,
      subject:    self.subject,
      message:    self.message,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from a `registrations` row.
pub struct RawRegistration {
  pub id:         String,
  pub full_name:  String,
  pub email:      String,
  pub phone:      String,
  pub course:     String,
  pub experience: String,
  pub created_at: String,
}

impl RawRegistration {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      full_name:  row.get(1)?,
      email:      row.get(2)?,
      phone:      row.get(3)?,
      course:     row.get(4)?,
      experience: row.get(5)?,
      created_at: row.get(6)?,
    })
  }

  pub fn into_registration(self) -> Result<Registration> {
    Ok(Registration {
      id:         RegistrationId(decode_uuid(&self.id)?),
      full_name:  self.full_name,
      email:      self.email,
      phone:      self.phone,
      course:     decode_course(&self.course)?,
      experience: self.experience,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}
