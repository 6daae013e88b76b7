//! jotter-server: HTTP API server for the jotter notes service
//!
//! This crate provides:
//! - REST endpoints for notes, users and login
//! - Bearer-token authentication
//! - Explicit input validation
//! - Central JSON error mapping
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//!
//! Handlers receive an `AppState` carrying the store handle and the
//! server configuration; all failures convert to `ApiError` and render
//! through a single `IntoResponse` implementation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use jotter_server::{config::ServerConfig, routes, state::AppState};
//! use jotter_store::{Store, StoreConfig};
//!
//! let config = ServerConfig::from_env()?;
//! let store = Store::connect(StoreConfig::from_env()?).await?;
//! let app = routes::build_router(AppState::new(store, config));
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod validate;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export the store crate for downstream use
pub use jotter_store;
