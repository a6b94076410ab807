//! Declarative field validation for submitted forms.
//!
//! Each entity kind has a table of [`FieldRule`]s. A raw submission is
//! checked field by field (presence, length bounds, email shape, choice
//! membership) and either yields typed values or a [`FieldErrors`] map.
//! Validation is pure; it never touches a store.

use std::{
  collections::{BTreeMap, HashMap},
  str::FromStr,
  sync::LazyLock,
};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::entity::{Course, NewContact, NewRegistration};

/// Raw field name → raw submitted value, as decoded from a form or JSON body.
pub type RawFields = HashMap<String, String>;

// ─── Field errors ────────────────────────────────────────────────────────────

/// Field name → human-readable violation messages.
///
/// Ordered by field name so identical rejections compare and serialise
/// identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
  pub fn new() -> Self { Self::default() }

  /// Record a violation against `field`.
  pub fn add(&mut self, field: &str, message: impl Into<String>) {
    self.0.entry(field.to_owned()).or_default().push(message.into());
  }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  /// Number of fields with at least one violation.
  pub fn len(&self) -> usize { self.0.len() }

  pub fn contains(&self, field: &str) -> bool { self.0.contains_key(field) }

  /// Messages recorded against `field`, empty if none.
  pub fn get(&self, field: &str) -> &[String] {
    self.0.get(field).map(Vec::as_slice).unwrap_or_default()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
    self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
  }

  fn into_result<T>(self, ok: impl FnOnce() -> T) -> Result<T, Self> {
    if self.is_empty() { Ok(ok()) } else { Err(self) }
  }
}

// ─── Rules ───────────────────────────────────────────────────────────────────

/// The shape check applied to a field's value after length checks.
#[derive(Debug, Clone, Copy)]
pub enum FieldShape {
  /// Any text.
  Text,
  /// `local@domain` with a dotted domain.
  Email,
  /// Must be accepted by the membership predicate (case-sensitive).
  Choice(fn(&str) -> bool),
}

/// Constraints for one form field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
  pub name:     &'static str,
  pub required: bool,
  pub max_len:  Option<usize>,
  pub shape:    FieldShape,
}

impl FieldRule {
  const fn text(name: &'static str, max_len: Option<usize>) -> Self {
    Self { name, required: true, max_len, shape: FieldShape::Text }
  }

  const fn email(name: &'static str) -> Self {
    Self {
      name,
      required: true,
      max_len: Some(EMAIL_MAX_LEN),
      shape: FieldShape::Email,
    }
  }
}

/// Upper bound on stored email addresses.
pub const EMAIL_MAX_LEN: usize = 254;

fn is_course_code(value: &str) -> bool { Course::from_str(value).is_ok() }

pub const CONTACT_RULES: &[FieldRule] = &[
  FieldRule::text("name", Some(100)),
  FieldRule::email("email"),
  FieldRule::text("subject", Some(200)),
  FieldRule::text("message", None),
];

pub const REGISTRATION_RULES: &[FieldRule] = &[
  FieldRule::text("full_name", Some(100)),
  FieldRule::email("email"),
  FieldRule::text("phone", Some(20)),
  FieldRule {
    name:     "course",
    required: true,
    max_len:  Some(20),
    shape:    FieldShape::Choice(is_course_code),
  },
  FieldRule::text("experience", None),
];

// ─── Messages ────────────────────────────────────────────────────────────────

pub const MSG_REQUIRED: &str = "This field is required.";
pub const MSG_INVALID_EMAIL: &str = "Enter a valid email address.";

fn msg_too_long(max: usize, len: usize) -> String {
  format!("Ensure this value has at most {max} characters (it has {len}).")
}

fn msg_invalid_choice(value: &str) -> String {
  format!("Select a valid choice. {value} is not one of the available choices.")
}

// ─── Checks ──────────────────────────────────────────────────────────────────

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("email pattern compiles")
});

/// Whether `value` has a non-empty local part, an `@`, and a non-empty
/// domain containing a dot.
pub fn is_email(value: &str) -> bool { EMAIL_RE.is_match(value) }

/// Validated, trimmed values keyed by field name.
#[derive(Debug, Default)]
pub struct Cleaned(HashMap<&'static str, String>);

impl Cleaned {
  /// Take the cleaned value of `field`; empty for optional fields left blank.
  pub fn take(&mut self, field: &str) -> String {
    self.0.remove(field).unwrap_or_default()
  }
}

/// Check `raw` against `rules`, reporting every violation found.
///
/// Values are trimmed first. A required field that is missing or blank gets
/// only the "required" message; otherwise length, shape and choice checks
/// all run and may each add a message. Fields not named by a rule are
/// ignored.
pub fn validate(rules: &[FieldRule], raw: &RawFields) -> Result<Cleaned, FieldErrors> {
  let mut errors = FieldErrors::new();
  let mut cleaned = Cleaned::default();

  for rule in rules {
    let value = raw.get(rule.name).map(|v| v.trim()).unwrap_or_default();

    if value.is_empty() {
      if rule.required {
        errors.add(rule.name, MSG_REQUIRED);
      }
      continue;
    }

    let len = value.chars().count();
    if let Some(max) = rule.max_len
      && len > max
    {
      errors.add(rule.name, msg_too_long(max, len));
    }

    match rule.shape {
      FieldShape::Text => {}
      FieldShape::Email => {
        if !is_email(value) {
          errors.add(rule.name, MSG_INVALID_EMAIL);
        }
      }
      FieldShape::Choice(accepts) => {
        if !accepts(value) {
          errors.add(rule.name, msg_invalid_choice(value));
        }
      }
    }

    cleaned.0.insert(rule.name, value.to_owned());
  }

  errors.into_result(|| cleaned)
}

/// Validate a contact form submission.
pub fn validate_contact(raw: &RawFields) -> Result<NewContact, FieldErrors> {
  let mut c = validate(CONTACT_RULES, raw)?;
  Ok(NewContact {
    name:    c.take("name"),
    email:   c.take("email"),
    subject: c.take("subject"),
    message: c.take("message"),
  })
}

/// Validate a course registration submission.
pub fn validate_registration(raw: &RawFields) -> Result<NewRegistration, FieldErrors> {
  let mut c = validate(REGISTRATION_RULES, raw)?;
  let code = c.take("course");
  let course = Course::from_str(&code).map_err(|_| {
    let mut errors = FieldErrors::new();
    errors.add("course", msg_invalid_choice(&code));
    errors
  })?;
  Ok(NewRegistration {
    full_name: c.take("full_name"),
    email: c.take("email"),
    phone: c.take("phone"),
    course,
    experience: c.take("experience"),
  })
}
