//! Entity types: the two kinds of submission the site persists.
//!
//! Entities are created exactly once and never updated. The id and the
//! creation timestamp are assigned explicitly by the submission service when
//! the entity is constructed, not by the store.

use std::fmt;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use uuid::Uuid;

// ─── Identifiers ─────────────────────────────────────────────────────────────

/// Opaque identifier of a stored [`Contact`].
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
  Deserialize,
)]
#[serde(transparent)]
pub struct ContactId(pub Uuid);

/// Opaque identifier of a stored [`Registration`].
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
  Deserialize,
)]
#[serde(transparent)]
pub struct RegistrationId(pub Uuid);

impl ContactId {
  pub fn new() -> Self { Self(Uuid::new_v4()) }
}

impl RegistrationId {
  pub fn new() -> Self { Self(Uuid::new_v4()) }
}

impl Default for ContactId {
  fn default() -> Self { Self::new() }
}

impl Default for RegistrationId {
  fn default() -> Self { Self::new() }
}

impl fmt::Display for ContactId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

impl fmt::Display for RegistrationId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

/// The kinds of entity held by a record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
  Contact,
  Registration,
}

/// The current time at the precision the store keeps (microseconds), so a
/// freshly built entity compares equal to its stored copy.
pub fn now() -> DateTime<Utc> { Utc::now().trunc_subsecs(6) }

// ─── Course ──────────────────────────────────────────────────────────────────

/// A course a visitor can register for.
///
/// The lowercase code is what forms submit and what the store persists;
/// parsing is case-sensitive.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  EnumIter,
  EnumString,
  IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Course {
  Web,
  Data,
  Ai,
  Mobile,
  Cloud,
}

impl Course {
  /// The short code, e.g. `"web"`.
  pub fn code(self) -> &'static str { self.into() }

  /// The human-readable label shown in forms and listings.
  pub fn label(self) -> &'static str {
    match self {
      Self::Web => "Web Development",
      Self::Data => "Data Science",
      Self::Ai => "Artificial Intelligence",
      Self::Mobile => "Mobile Development",
      Self::Cloud => "Cloud Computing",
    }
  }

  /// All courses in display order.
  pub fn all() -> impl Iterator<Item = Self> { Self::iter() }
}

impl fmt::Display for Course {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

// ─── Contact ─────────────────────────────────────────────────────────────────

/// A message left through the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub id:         ContactId,
  pub name:       String,
  pub email:      String,
  pub subject:    String,
  pub message:    String,
  pub created_at: DateTime<Utc>,
}

/// Validated contact fields, before an id and timestamp are assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
  pub name:    String,
  pub email:   String,
  pub subject: String,
  pub message: String,
}

impl NewContact {
  /// Stamp the fields with a fresh id and the current time.
  pub fn into_contact(self) -> Contact {
    Contact {
      id:         ContactId::new(),
      name:       self.name,
      email:      self.email,
      subject:    self.subject,
      message:    self.message,
      created_at: now(),
    }
  }
}

impl fmt::Display for Contact {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} - {}", self.name, self.subject)
  }
}

// ─── Registration ────────────────────────────────────────────────────────────

/// A course registration submitted through the registration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
  pub id:         RegistrationId,
  pub full_name:  String,
  pub email:      String,
  pub phone:      String,
  pub course:     Course,
  pub experience: String,
  pub created_at: DateTime<Utc>,
}

/// Validated registration fields, before an id and timestamp are assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRegistration {
  pub full_name:  String,
  pub email:      String,
  pub phone:      String,
  pub course:     Course,
  pub experience: String,
}

impl NewRegistration {
  /// Stamp the fields with a fresh id and the current time.
  pub fn into_registration(self) -> Registration {
    Registration {
      id:         RegistrationId::new(),
      full_name:  self.full_name,
      email:      self.email,
      phone:      self.phone,
      course:     self.course,
      experience: self.experience,
      created_at: now(),
    }
  }
}

impl fmt::Display for Registration {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} - {}", self.full_name, self.course.label())
  }
}
