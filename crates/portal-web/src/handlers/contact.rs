//! `GET /contact` and `POST /contact`.

use axum::{
  Form,
  extract::{Query, State},
  http::StatusCode,
  response::{Html, IntoResponse, Redirect, Response},
};
use portal_core::{FieldErrors, RawFields, store::RecordStore};
use serde::Deserialize;

use crate::{AppState, error::Error, render};

#[derive(Debug, Default, Deserialize)]
pub struct ContactParams {
  /// Set by the redirect that follows a successful submission.
  pub sent: Option<String>,
}

pub async fn show(Query(params): Query<ContactParams>) -> Html<String> {
  Html(render::contact_page(
    &RawFields::new(),
    &FieldErrors::new(),
    params.sent.is_some(),
  ))
}

/// Store the message and redirect, or redisplay the form with errors.
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Form(raw): Form<RawFields>,
) -> Result<Response, Error>
where
  S: RecordStore + 'static,
{
  match state.submissions.submit_contact(&raw).await {
    Ok(_) => Ok(Redirect::to("/contact?sent=1").into_response()),
    Err(portal_core::Error::Validation(errors)) => Ok(
      (
        StatusCode::UNPROCESSABLE_ENTITY,
        Html(render::contact_page(&raw, &errors, false)),
      )
        .into_response(),
    ),
    Err(e) => Err(e.into()),
  }
}
