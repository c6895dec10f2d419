//! Vector detection.
//!
//! A value is a vector when, checked in this order:
//! 1. it is an array,
//! 2. its length is at least the threshold,
//! 3. it is non-empty and every element is a JSON number.
//!
//! Booleans are never numbers here, and neither are numeric strings.

use serde_json::Value;

use restructure_types::{RestructureError, DEFAULT_THRESHOLD};

/// Minimum array length for an array to count as a vector. Always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(usize);

impl Threshold {
    /// Validate a configured threshold.
    pub fn new(value: i64) -> Result<Self, RestructureError> {
        if value <= 0 {
            return Err(RestructureError::Config(format!(
                "threshold must be a positive integer, got {}",
                value
            )));
        }
        usize::try_from(value).map(Self).map_err(|_| {
            RestructureError::Config(format!("threshold {} exceeds addressable length", value))
        })
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD as usize)
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decide whether `value` should be extracted as a vector.
pub fn is_vector(value: &Value, threshold: Threshold) -> bool {
    let Value::Array(items) = value else {
        return false;
    };
    if items.len() < threshold.get() {
        return false;
    }
    !items.is_empty() && items.iter().all(Value::is_number)
}
