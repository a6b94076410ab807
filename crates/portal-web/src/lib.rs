//! The Portal website.
//!
//! Serves the contact and course-registration forms, the registration
//! dashboard, and the JSON API from `portal-api`, all backed by any
//! [`RecordStore`].

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod render;

pub use config::ServerConfig;
pub use error::Error;

use std::sync::Arc;

use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use axum::{Router, middleware, routing::get};
use portal_api::ApiState;
use portal_core::{ListingService, SubmissionService, store::RecordStore};
use rand_core::OsRng;

use auth::AuthConfig;
use handlers::{contact, dashboard, registration};

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S> {
  pub submissions: SubmissionService<S>,
  pub listing:     ListingService<S>,
  /// `None` leaves the dashboard and API open.
  pub auth:        Option<Arc<AuthConfig>>,
  pub config:      Arc<ServerConfig>,
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      submissions: self.submissions.clone(),
      listing:     self.listing.clone(),
      auth:        self.auth.clone(),
      config:      Arc::clone(&self.config),
    }
  }
}

impl<S: RecordStore> AppState<S> {
  pub fn new(store: Arc<S>, config: ServerConfig) -> Self {
    Self {
      submissions: SubmissionService::new(Arc::clone(&store)),
      listing:     ListingService::with_settings(store, config.listing_settings()),
      auth:        config.auth().map(Arc::new),
      config:      Arc::new(config),
    }
  }

  fn api_state(&self) -> ApiState<S> {
    ApiState { submissions: self.submissions.clone(), listing: self.listing.clone() }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the site router.
///
/// The HTML forms are always public. `/dashboard` and every `/api` route,
/// reads and writes alike, sit behind [`auth::require_auth`].
pub fn router<S>(state: AppState<S>) -> Router
where
  S: RecordStore + 'static,
{
  let guarded = Router::new()
    .route("/dashboard", get(dashboard::show::<S>))
    .with_state(state.clone())
    .nest("/api", portal_api::api_router(state.api_state()))
    .route_layer(middleware::from_fn_with_state(
      state.clone(),
      auth::require_auth::<S>,
    ));

  Router::new()
    .route("/contact", get(contact::show).post(contact::submit::<S>))
    .route("/form", get(registration::show).post(registration::submit::<S>))
    .route("/success", get(registration::success))
    .with_state(state)
    .merge(guarded)
}

/// Hash `password` into an argon2 PHC string for `dashboard_password_hash`.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
  let salt = SaltString::generate(&mut OsRng);
  Ok(Argon2::default().hash_password(password.as_bytes(), &salt)?.to_string())
}

// ─── Integration tests ────────────────────────────────────────────────────────
