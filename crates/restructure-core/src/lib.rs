//! # restructure-core
//!
//! Extracts dense numeric arrays (embedding vectors) from arbitrary JSON
//! documents into a side table and replaces each one with a short reference.
//!
//! ```text
//! {"embedding": [0.1, 0.2, 0.3]}
//!   -> {"data": {"embedding_id": "vec_0"}, "vectors": {"vec_0": [0.1, 0.2, 0.3]}}
//! ```
//!
//! ## Features
//! - Vector detection by length threshold and all-numeric elements
//! - Deterministic `vec_<n>` references in pre-order discovery order
//! - Explicit-stack traversal (nesting depth does not consume thread stack)
//! - Inverse transform via [`restore`]
//!
//! Only arrays sitting directly under a mapping key are extracted. Arrays
//! nested inside other arrays have no key to carry the `_id` suffix and
//! pass through unchanged.

pub mod detect;
pub mod id;
pub mod restore;
pub mod restructurer;
pub mod store;
pub mod walk;

pub use detect::{is_vector, Threshold};
pub use id::IdGenerator;
pub use restore::restore;
pub use restructurer::{Restructurer, RestructuringResult};
pub use store::VectorStore;
pub use walk::{walk, EntryRewriter, Rewrite};

pub use restructure_types::{KeyCollisionPolicy, RestructureError};

/// Output key for a mapping entry whose value was extracted.
pub fn derived_key(key: &str) -> String {
    format!("{}{}", key, restructure_types::ID_SUFFIX)
}
