//! Handlers for `/contacts` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/contacts` | Body: JSON object of raw form fields; 201 + `{"id"}`, 422 on invalid fields, 400 on a malformed body |
//! | `GET`  | `/contacts/recent` | Optional `?limit=` (default 5), newest first |

use axum::{
  Json,
  extract::{
    Query, State,
    rejection::{JsonRejection, QueryRejection},
  },
  http::StatusCode,
  response::IntoResponse,
};
use portal_core::{
  RawFields,
  entity::{Contact, ContactId},
  listing::DEFAULT_RECENT_CONTACTS,
  store::RecordStore,
};
use serde::{Deserialize, Serialize};

use crate::{ApiState, error::ApiError};

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct Created<Id> {
  pub id: Id,
}

/// `POST /contacts`: returns 201 + the new id.
pub async fn create<S>(
  State(state): State<ApiState<S>>,
  payload: Result<Json<RawFields>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore + 'static,
{
  let Json(raw) = payload?;
  let id: ContactId = state.submissions.submit_contact(&raw).await?;
  Ok((StatusCode::CREATED, Json(Created { id })))
}

// ─── Recent ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RecentParams {
  pub limit: Option<u32>,
}

/// `GET /contacts/recent[?limit=<n>]`
pub async fn recent<S>(
  State(state): State<ApiState<S>>,
  params: Result<Query<RecentParams>, QueryRejection>,
) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: RecordStore + 'static,
{
  let Query(params) = params?;
  let limit = params.limit.unwrap_or(DEFAULT_RECENT_CONTACTS);
  Ok(Json(state.listing.recent_contacts(limit).await?))
}
