//! HTML page handlers, one module per page family.

pub mod contact;
pub mod dashboard;
pub mod registration;
