//! The `RecordStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `portal-store-sqlite`).
//! The submission and listing services depend on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use crate::entity::{Contact, ContactId, EntityKind, Registration, RegistrationId};

/// Ordering of a scan over `created_at`.
///
/// Ties on `created_at` are broken by insertion order in the same direction,
/// so `NewestFirst` yields the most recently inserted row first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
  #[default]
  NewestFirst,
  OldestFirst,
}

/// Durable, append-only table storage for submitted entities.
///
/// Rows are only ever inserted; there is no update or delete. Implementations
/// must not lose concurrent inserts and must reject a duplicate id.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait RecordStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Append `contact` and return its id.
  fn insert_contact(
    &self,
    contact: Contact,
  ) -> impl Future<Output = Result<ContactId, Self::Error>> + Send + '_;

  /// Append `registration` and return its id.
  fn insert_registration(
    &self,
    registration: Registration,
  ) -> impl Future<Output = Result<RegistrationId, Self::Error>> + Send + '_;

  /// Up to `limit` contacts in `order`, skipping the first `offset`.
  fn scan_contacts(
    &self,
    order: SortOrder,
    offset: u64,
    limit: u64,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Up to `limit` registrations in `order`, skipping the first `offset`.
  fn scan_registrations(
    &self,
    order: SortOrder,
    offset: u64,
    limit: u64,
  ) -> impl Future<Output = Result<Vec<Registration>, Self::Error>> + Send + '_;

  /// Number of stored rows of `kind`.
  fn count(
    &self,
    kind: EntityKind,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
