//! Fleetdesk core: pure domain logic shared by the API server and the
//! admin client.
//!
//! Contains the route-entity mapper, the declarative validation engine
//! with per-entity schemas, and the single-record submission pipeline.
//! No I/O happens in this crate; network and storage live behind the
//! seams defined here.

pub mod error;
pub mod routes;
pub mod submission;
pub mod types;
pub mod validation;
