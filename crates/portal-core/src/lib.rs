//! Core types and services for the Portal site.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! It holds the entity types, the form validator, the [`store::RecordStore`]
//! abstraction, and the submission and listing services built on it.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod entity;
pub mod error;
pub mod listing;
pub mod store;
pub mod submit;
pub mod validate;

#[cfg(test)]
mod memory;

pub use error::{Error, Result};
pub use listing::{Dashboard, ListingService, ListingSettings, Page};
pub use submit::SubmissionService;
pub use validate::{FieldErrors, RawFields};
