//! Database library providing the MongoDB connector used by the catalog domains
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB client bootstrap
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, connect_from_config_with_retry, resolve_database};
//! use core_config::FromEnv;
//!
//! let config = MongoConfig::from_env()?;
//! let client = connect_from_config_with_retry(&config, None).await?;
//! let db = resolve_database(&client, &config)?;
//! ```
//!
//! The client is created once at startup and handed to every consumer; it is
//! never stored in a global.

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult};
