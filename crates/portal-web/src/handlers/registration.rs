//! `GET /form`, `POST /form` and `GET /success`.

use axum::{
  Form,
  extract::State,
  http::StatusCode,
  response::{Html, IntoResponse, Redirect, Response},
};
use portal_core::{FieldErrors, RawFields, store::RecordStore};

use crate::{AppState, error::Error, render};

pub async fn show() -> Html<String> {
  Html(render::registration_page(&RawFields::new(), &FieldErrors::new()))
}

pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Form(raw): Form<RawFields>,
) -> Result<Response, Error>
where
  S: RecordStore + 'static,
{
  match state.submissions.submit_registration(&raw).await {
    Ok(_) => Ok(Redirect::to("/success").into_response()),
    Err(portal_core::Error::Validation(errors)) => Ok(
      (
        StatusCode::UNPROCESSABLE_ENTITY,
        Html(render::registration_page(&raw, &errors)),
      )
        .into_response(),
    ),
    Err(e) => Err(e.into()),
  }
}

pub async fn success() -> Html<String> { Html(render::success_page()) }
