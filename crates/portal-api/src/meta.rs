//! Handlers for `GET /courses` and `GET /stats`.

use axum::{Json, extract::State};
use portal_core::{entity::Course, store::RecordStore};
use serde::Serialize;

use crate::{ApiState, error::ApiError};

#[derive(Debug, Serialize)]
pub struct CourseChoice {
  pub code:  &'static str,
  pub label: &'static str,
}

/// `GET /courses`: every course a registration may name.
pub async fn courses() -> Json<Vec<CourseChoice>> {
  Json(
    Course::all()
      .map(|c| CourseChoice { code: c.code(), label: c.label() })
      .collect(),
  )
}

#[derive(Debug, Serialize)]
pub struct Stats {
  pub total_contacts:      u64,
  pub total_registrations: u64,
}

/// `GET /stats`
pub async fn stats<S>(State(state): State<ApiState<S>>) -> Result<Json<Stats>, ApiError>
where
  S: RecordStore + 'static,
{
  Ok(Json(Stats {
    total_contacts:      state.listing.count_contacts().await?,
    total_registrations: state.listing.count_registrations().await?,
  }))
}
