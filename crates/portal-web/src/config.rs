//! Runtime server configuration, deserialised from `config.toml` and
//! `PORTAL_*` environment variables.

use std::path::PathBuf;

use portal_core::{
  ListingSettings,
  listing::{DEFAULT_PAGE_SIZE, DEFAULT_RECENT_CONTACTS},
};
use serde::Deserialize;

use crate::auth::AuthConfig;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:                    String,
  pub port:                    u16,
  pub store_path:              PathBuf,
  /// Registrations per dashboard page.
  pub page_size:               u32,
  /// Contacts in the dashboard's recent panel.
  pub recent_contacts:         u32,
  /// Dashboard and API are open unless both of these are set.
  pub dashboard_username:      Option<String>,
  pub dashboard_password_hash: Option<String>,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:                    "127.0.0.1".into(),
      port:                    8000,
      store_path:              PathBuf::from("portal.db"),
      page_size:               DEFAULT_PAGE_SIZE,
      recent_contacts:         DEFAULT_RECENT_CONTACTS,
      dashboard_username:      None,
      dashboard_password_hash: None,
    }
  }
}

impl ServerConfig {
  /// Credentials guarding the dashboard, if both halves are configured.
  pub fn auth(&self) -> Option<AuthConfig> {
    match (&self.dashboard_username, &self.dashboard_password_hash) {
      (Some(username), Some(hash)) => Some(AuthConfig {
        username:      username.clone(),
        password_hash: hash.clone(),
      }),
      _ => None,
    }
  }

  pub fn listing_settings(&self) -> ListingSettings {
    ListingSettings { page_size: self.page_size, recent_contacts: self.recent_contacts }
  }

  /// Reject sizes the listing service would refuse on every request.
  pub fn check(&self) -> Result<(), String> {
    if self.page_size == 0 {
      return Err("page_size must be positive".into());
    }
    if self.recent_contacts == 0 {
      return Err("recent_contacts must be positive".into());
    }
    if self.dashboard_username.is_some() != self.dashboard_password_hash.is_some() {
      return Err(
        "dashboard_username and dashboard_password_hash must be set together".into(),
      );
    }
    Ok(())
  }
}
