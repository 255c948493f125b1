//! HTTP handler modules for the sortviz API.
//!
//! Handlers decode the request, delegate to [`sortviz_core`], and return JSON
//! responses. No sorting logic lives here.

pub mod algorithms;
pub mod sort;
