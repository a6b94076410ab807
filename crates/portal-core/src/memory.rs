//! An in-process `RecordStore` used by the service tests.

use std::{cmp::Reverse, sync::Mutex};

use thiserror::Error;

use crate::{
  entity::{Contact, ContactId, EntityKind, Registration, RegistrationId},
  store::{RecordStore, SortOrder},
};

#[derive(Debug, Error)]
#[error("memory store unavailable")]
pub struct Unavailable;

#[derive(Default)]
pub struct MemoryStore {
  contacts:      Mutex<Vec<Contact>>,
  registrations: Mutex<Vec<Registration>>,
  failing:       bool,
}

impl MemoryStore {
  /// A store whose every operation fails.
  pub fn failing() -> Self { Self { failing: true, ..Self::default() } }

  fn check(&self) -> Result<(), Unavailable> {
    if self.failing { Err(Unavailable) } else { Ok(()) }
  }
}

fn scan<T: Clone, K: Ord>(
  rows: &[T],
  key: impl Fn(&T) -> K,
  order: SortOrder,
  offset: u64,
  limit: u64,
) -> Vec<T> {
  // Walk newest-inserted first so the stable sort breaks ties that way.
  let mut sorted: Vec<T> = rows.iter().rev().cloned().collect();
  sorted.sort_by_key(|row| Reverse(key(row)));
  if order == SortOrder::OldestFirst {
    sorted.reverse();
  }
  sorted
    .into_iter()
    .skip(usize::try_from(offset).unwrap_or(usize::MAX))
    .take(usize::try_from(limit).unwrap_or(usize::MAX))
    .collect()
}

impl RecordStore for MemoryStore {
  type Error = Unavailable;

  async fn insert_contact(&self, contact: Contact) -> Result<ContactId, Unavailable> {
    self.check()?;
    let id = contact.id;
    self.contacts.lock().unwrap().push(contact);
    Ok(id)
  }

  async fn insert_registration(
    &self,
    registration: Registration,
  ) -> Result<RegistrationId, Unavailable> {
    self.check()?;
    let id = registration.id;
    self.registrations.lock().unwrap().push(registration);
    Ok(id)
  }

  async fn scan_contacts(
    &self,
    order: SortOrder,
    offset: u64,
    limit: u64,
  ) -> Result<Vec<Contact>, Unavailable> {
    self.check()?;
    let rows = self.contacts.lock().unwrap();
    Ok(scan(&rows, |c| c.created_at, order, offset, limit))
  }

  async fn scan_registrations(
    &self,
    order: SortOrder,
    offset: u64,
    limit: u64,
  ) -> Result<Vec<Registration>, Unavailable> {
    self.check()?;
    let rows = self.registrations.lock().unwrap();
    Ok(scan(&rows, |r| r.created_at, order, offset, limit))
  }

  async fn count(&self, kind: EntityKind) -> Result<u64, Unavailable> {
    self.check()?;
    let n = match kind {
      EntityKind::Contact => self.contacts.lock().unwrap().len(),
      EntityKind::Registration => self.registrations.lock().unwrap().len(),
    };
    Ok(n as u64)
  }
}
