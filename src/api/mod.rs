//! HTTP API handlers and routes.
//!
//! The transport layer for Scout, built on the Axum web framework.
//!
//! # API Endpoints
//!
//! - `GET /` - Query form (HTML)
//! - `POST /process_query` - Run the agent loop for a form-encoded `query`
//! - `GET /static/*` - Static assets

/// Request and response handlers.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;
