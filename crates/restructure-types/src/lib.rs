//! # restructure-types
//!
//! Shared types for the JSON vector restructurer.
//!
//! This crate defines what the core and the CLI agree on:
//! - Errors: the unified [`RestructureError`]
//! - Settings: layered configuration ([`Settings`])
//! - Policy: how derived `_id` key collisions are handled ([`KeyCollisionPolicy`])
//! - Constants: output layout keys and the reference format
//!
//! ## Usage
//!
//! ```rust
//! use restructure_types::{Settings, DEFAULT_THRESHOLD};
//!
//! let settings = Settings::default();
//! assert_eq!(settings.threshold, DEFAULT_THRESHOLD);
//! ```

pub mod config;
pub mod error;
pub mod policy;

pub use config::Settings;
pub use error::RestructureError;
pub use policy::KeyCollisionPolicy;

/// Minimum array length treated as a vector when nothing else is configured.
pub const DEFAULT_THRESHOLD: i64 = 2;

/// Suffix appended to a mapping key whose value was extracted.
///
/// `embedding` becomes `embedding_id`.
pub const ID_SUFFIX: &str = "_id";

/// Prefix of every generated vector reference (`vec_0`, `vec_1`, ...).
pub const ID_PREFIX: &str = "vec_";

/// Key holding the rewritten document in the output envelope.
pub const DATA_KEY: &str = "data";

/// Key holding the vector store in the output envelope.
pub const VECTORS_KEY: &str = "vectors";
