//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use roi_calc_api::prelude::*;
//! ```

pub use crate::error::ApiError;
pub use crate::models::*;
pub use crate::openapi::ApiDoc;
pub use crate::routes::create_router;
pub use crate::server::{ApiServer, ServerConfig};
pub use crate::services::ScenarioService;
pub use crate::state::AppState;
