//! Listing service: newest-first views over stored submissions.
//!
//! Pagination is offset-based and 1-indexed: page `n` of size `s` covers rows
//! `[(n - 1) * s, n * s)` of the newest-first ordering. A page past the end is
//! empty rather than an error.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
  Error, Result,
  entity::{Contact, EntityKind, Registration},
  store::{RecordStore, SortOrder},
};

/// Registrations per dashboard page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Contacts shown in the dashboard's "recent" panel.
pub const DEFAULT_RECENT_CONTACTS: u32 = 5;

// ─── Result types ────────────────────────────────────────────────────────────

/// One page of an ordered listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
  pub items:       Vec<T>,
  /// The requested page number, 1-indexed.
  pub page:        u32,
  pub page_size:   u32,
  /// Rows across all pages.
  pub total_count: u64,
  /// Always at least 1, even when there are no rows.
  pub num_pages:   u64,
  pub has_next:    bool,
  pub has_prev:    bool,
}

impl<T> Page<T> {
  pub fn next_page(&self) -> Option<u32> { self.has_next.then(|| self.page + 1) }

  /// The page before this one, or the last real page when this one is past
  /// the end.
  pub fn prev_page(&self) -> Option<u32> {
    let last = u32::try_from(self.num_pages).unwrap_or(u32::MAX);
    self.has_prev.then(|| (self.page - 1).min(last))
  }
}

/// Everything the dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
  pub registrations:       Page<Registration>,
  pub recent_contacts:     Vec<Contact>,
  pub total_registrations: u64,
  pub total_contacts:      u64,
}

// ─── Service ─────────────────────────────────────────────────────────────────

/// Sizes used by [`ListingService::dashboard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingSettings {
  pub page_size:       u32,
  pub recent_contacts: u32,
}

impl Default for ListingSettings {
  fn default() -> Self {
    Self { page_size: DEFAULT_PAGE_SIZE, recent_contacts: DEFAULT_RECENT_CONTACTS }
  }
}

/// Read-only queries over the store.
pub struct ListingService<S> {
  store:    Arc<S>,
  settings: ListingSettings,
}

impl<S> Clone for ListingService<S> {
  fn clone(&self) -> Self {
    Self { store: Arc::clone(&self.store), settings: self.settings }
  }
}

impl<S: RecordStore> ListingService<S> {
  pub fn new(store: Arc<S>) -> Self { Self::with_settings(store, ListingSettings::default()) }

  pub fn with_settings(store: Arc<S>, settings: ListingSettings) -> Self {
    Self { store, settings }
  }

  pub fn settings(&self) -> ListingSettings { self.settings }

  /// Page `page` (1-indexed) of registrations, newest first.
  ///
  /// Returns [`Error::InvalidArgument`] when `page` or `page_size` is zero.
  #[instrument(skip(self))]
  pub async fn list_registrations(
    &self,
    page: u32,
    page_size: u32,
  ) -> Result<Page<Registration>> {
    if page_size == 0 {
      return Err(Error::InvalidArgument("page_size must be positive".into()));
    }
    if page == 0 {
      return Err(Error::InvalidArgument("page numbers start at 1".into()));
    }

    let total_count = self
      .store
      .count(EntityKind::Registration)
      .await
      .map_err(Error::storage)?;

    let offset = u64::from(page - 1) * u64::from(page_size);
    let items = self
      .store
      .scan_registrations(SortOrder::NewestFirst, offset, u64::from(page_size))
      .await
      .map_err(Error::storage)?;

    let num_pages = total_count.div_ceil(u64::from(page_size)).max(1);
    debug!(returned = items.len(), total_count, "listed registrations");

    Ok(Page {
      items,
      page,
      page_size,
      total_count,
      num_pages,
      has_next: u64::from(page) < num_pages,
      has_prev: page > 1,
    })
  }

  /// The `limit` most recently created contacts, newest first.
  #[instrument(skip(self))]
  pub async fn recent_contacts(&self, limit: u32) -> Result<Vec<Contact>> {
    if limit == 0 {
      return Err(Error::InvalidArgument("limit must be positive".into()));
    }
    self
      .store
      .scan_contacts(SortOrder::NewestFirst, 0, u64::from(limit))
      .await
      .map_err(Error::storage)
  }

  pub async fn count_contacts(&self) -> Result<u64> {
    self.store.count(EntityKind::Contact).await.map_err(Error::storage)
  }

  pub async fn count_registrations(&self) -> Result<u64> {
    self.store.count(EntityKind::Registration).await.map_err(Error::storage)
  }

  /// Page `page` of registrations plus the recent-contacts panel and totals,
  /// sized by this service's [`ListingSettings`].
  #[instrument(skip(self))]
  pub async fn dashboard(&self, page: u32) -> Result<Dashboard> {
    let registrations = self.list_registrations(page, self.settings.page_size).await?;
    let recent_contacts = self.recent_contacts(self.settings.recent_contacts).await?;
    let total_contacts = self.count_contacts().await?;

    Ok(Dashboard {
      total_registrations: registrations.total_count,
      registrations,
      recent_contacts,
      total_contacts,
    })
  }
}
