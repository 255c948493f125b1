//! HTTP/JSON API server for step-recording sorts.
//!
//! Wraps [`sortviz_core`] behind a small axum router: clients post a list of
//! integers and an algorithm name and receive every recorded step, ready to
//! be replayed as an animation. This crate contains the router, handlers,
//! request/response schema, error mapping and configuration.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
