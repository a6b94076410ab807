//! `GET /dashboard[?page=<n>]`.

use axum::{
  extract::{Query, State, rejection::QueryRejection},
  response::Html,
};
use portal_core::store::RecordStore;
use serde::Deserialize;

use crate::{AppState, error::Error, render};

#[derive(Debug, Deserialize)]
pub struct DashboardParams {
  pub page: Option<u32>,
}

pub async fn show<S>(
  State(state): State<AppState<S>>,
  params: Result<Query<DashboardParams>, QueryRejection>,
) -> Result<Html<String>, Error>
where
  S: RecordStore + 'static,
{
  let Query(params) =
    params.map_err(|_| Error::BadRequest("page must be a positive integer".into()))?;
  let dashboard = state.listing.dashboard(params.page.unwrap_or(1)).await?;
  Ok(Html(render::dashboard_page(&dashboard)))
}
