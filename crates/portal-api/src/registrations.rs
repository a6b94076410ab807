//! Handlers for `/registrations` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/registrations` | Body: JSON object of raw form fields; 201 + `{"id"}`, 422 on invalid fields, 400 on a malformed body |
//! | `GET`  | `/registrations` | `?page=` (default 1), `?page_size=` (default: configured page size) |

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
  Page, RawFields,
  entity::Registration,
  store::RecordStore,
};
use serde::Deserialize;

use crate::{ApiState, contacts::Created, error::ApiError};

/// `POST /registrations`: returns 201 + the new id.
pub async fn create<S>(
  State(state): State<ApiState<S>>,
  payload: Result<Json<RawFields>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore + 'static,
{
  let Json(raw) = payload?;
  let id = state.submissions.submit_registration(&raw).await?;
  Ok((StatusCode::CREATED, Json(Created { id })))
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub page:      Option<u32>,
  pub page_size: Option<u32>,
}

/// `GET /registrations[?page=<n>][&page_size=<n>]`
pub async fn list<S>(
  State(state): State<ApiState<S>>,
  params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Page<Registration>>, ApiError>
where
  S: RecordStore + 'static,
{
  let Query(params) = params?;
  let page = state
    .listing
    .list_registrations(
      params.page.unwrap_or(1),
      params.page_size.unwrap_or(state.listing.settings().page_size),
    )
    .await?;
  Ok(Json(page))
}
