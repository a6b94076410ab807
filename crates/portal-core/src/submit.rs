//! Submission service: validate, stamp, persist.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::{
  Error, Result,
  entity::{ContactId, RegistrationId},
  store::RecordStore,
  validate::{RawFields, validate_contact, validate_registration},
};

/// Accepts raw form submissions and appends valid ones to the store.
///
/// A rejected submission never reaches the store, so retrying an invalid
/// submission can't create a row.
pub struct SubmissionService<S> {
  store: Arc<S>,
}

impl<S> Clone for SubmissionService<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: RecordStore> SubmissionService<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  /// Validate and store a contact message.
  ///
  /// Returns [`Error::Validation`] with the offending fields, or
  /// [`Error::Storage`] if the insert failed.
  #[instrument(skip_all)]
  pub async fn submit_contact(&self, raw: &RawFields) -> Result<ContactId> {
    let new_contact = validate_contact(raw).inspect_err(|errors| {
      warn!(fields = errors.len(), "contact submission rejected");
    })?;

    let id = self
      .store
      .insert_contact(new_contact.into_contact())
      .await
      .map_err(Error::storage)?;

    info!(contact_id = %id, "contact message stored");
    Ok(id)
  }

  /// Validate and store a course registration.
  #[instrument(skip_all)]
  pub async fn submit_registration(&self, raw: &RawFields) -> Result<RegistrationId> {
    let new_registration = validate_registration(raw).inspect_err(|errors| {
      warn!(fields = errors.len(), "registration submission rejected");
    })?;

    let course = new_registration.course;
    let id = self
      .store
      .insert_registration(new_registration.into_registration())
      .await
      .map_err(Error::storage)?;

    info!(registration_id = %id, course = course.code(), "registration stored");
    Ok(id)
  }
}
