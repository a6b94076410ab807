//! JSON REST API for Portal.
//!
//! Exposes the submission and listing services as an axum [`Router`] backed
//! by any [`portal_core::store::RecordStore`]. TLS and transport concerns are
//! the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", portal_api::api_router(ApiState::new(store.clone(), settings)))
//! ```

pub mod contacts;
pub mod error;
pub mod meta;
pub mod registrations;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use portal_core::{
  ListingService, ListingSettings, SubmissionService, store::RecordStore,
};

pub use error::ApiError;

/// Services shared by every API handler.
pub struct ApiState<S> {
  pub submissions: SubmissionService<S>,
  pub listing:     ListingService<S>,
}

impl<S> Clone for ApiState<S> {
  fn clone(&self) -> Self {
    Self { submissions: self.submissions.clone(), listing: self.listing.clone() }
  }
}

impl<S: RecordStore> ApiState<S> {
  pub fn new(store: Arc<S>, settings: ListingSettings) -> Self {
    Self {
      submissions: SubmissionService::new(Arc::clone(&store)),
      listing:     ListingService::with_settings(store, settings),
    }
  }
}

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: ApiState<S>) -> Router<()>
where
  S: RecordStore + 'static,
{
  Router::new()
    // Contacts
    .route("/contacts", post(contacts::create::<S>))
    .route("/contacts/recent", get(contacts::recent::<S>))
    // Registrations
    .route(
      "/registrations",
      get(registrations::list::<S>).post(registrations::create::<S>),
    )
    // Reference data and totals
    .route("/courses", get(meta::courses))
    .route("/stats", get(meta::stats::<S>))
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
