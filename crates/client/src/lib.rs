//! HTTP client library for the admin API.
//!
//! Provides a typed REST wrapper, paged lookup streams for reference
//! fields, and a dashboard form model that drives the submission
//! pipeline.

pub mod api;
pub mod form;
pub mod lookup;
