//! notelist-server: HTTP API server for the notelist service
//!
//! This crate provides:
//! - The REST surface under /api (connectivity check, notes CRUD)
//! - Translation of data-access failures to fixed JSON responses
//! - 405/404 handling for unsupported verbs and unmatched paths
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//!
//! Handlers stay thin; validation and persistence live in
//! `notelist-store`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use notelist_server::{config::ServerConfig, routes, state::AppState};
//!
//! let config = ServerConfig::from_env()?;
//! let app = routes::build_router(AppState::new(store, config));
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use notelist_core;
pub use notelist_store;
