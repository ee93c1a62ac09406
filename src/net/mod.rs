//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` sends raw requests, `request` is the authenticated executor,
//! `api` holds the typed endpoint wrappers, `types` the backend DTOs and
//! `error` the normalized failure type.

pub mod api;
pub mod error;
pub mod request;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
