//! jotter-store: Storage layer for the jotter notes service
//!
//! This crate provides:
//! - PostgreSQL storage for users and notes
//! - Migration management
//! - Type-safe database operations via sqlx
//!
//! # Architecture
//!
//! The store is an explicitly constructed handle around a connection
//! pool. Callers build it once at startup and pass it down; nothing in
//! this crate reaches for global state.
//!
//! # Usage
//!
//! ```rust,ignore
//! use jotter_store::{Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//!
//! // List notes with their owners
//! let notes = store.list_notes().await?;
//! ```

pub mod error;
pub mod models;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::*;
pub use store::{Store, StoreConfig};
