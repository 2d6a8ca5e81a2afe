//! notelist-store: Data-access layer for the notelist service
//!
//! This crate provides:
//! - PostgreSQL storage for notes via sqlx
//! - Request validation ahead of every statement (sort whitelist,
//!   list-id check, exact-field-set decoding of write input)
//! - Migration management
//! - The row/wire formatter between snake_case columns and the
//!   camelCase external shape
//!
//! # Usage
//!
//! ```rust,ignore
//! use notelist_store::{Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//!
//! let notes = store
//!     .select_all_notes_by_list_id("groceries", None, None)
//!     .await?;
//! ```

pub mod error;
pub mod models;
pub mod schema;
pub mod seed;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::NoteRow;
pub use store::{Store, StoreConfig};

// Re-export notelist-core for downstream crates
pub use notelist_core;
