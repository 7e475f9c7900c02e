//! REST API server and endpoints.
//!
//! This crate exposes the ROI calculator over HTTP:
//! - One-off ROI simulations
//! - Scenario storage (create, list, fetch, delete)
//! - Report generation and download
//! - OpenAPI documentation

/// Prelude module for convenient imports.
pub mod prelude;

/// Error types.
pub mod error;
/// Request handlers.
pub mod handlers;
/// API request/response models.
pub mod models;
/// OpenAPI documentation.
pub mod openapi;
/// Route definitions.
pub mod routes;
/// Server configuration and startup.
pub mod server;
/// Service layer for API operations.
pub mod services;
/// Application state.
pub mod state;

pub use error::ApiError;
pub use openapi::ApiDoc;
pub use routes::create_router;
pub use server::{ApiServer, ServerConfig};
pub use services::ScenarioService;
pub use state::AppState;
