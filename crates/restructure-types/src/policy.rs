//! Handling of `<key>_id` collisions inside a single mapping.

use serde::{Deserialize, Serialize};

/// What to do when the derived reference key already exists in the mapping.
///
/// Extracting `a` emits `a_id`. If the source mapping also contains an
/// `a_id` key, the two writes land on the same output key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KeyCollisionPolicy {
    /// Last write in key order wins; the key keeps its first position.
    #[default]
    Overwrite,
    /// Fail the run with `RestructureError::KeyCollision`.
    Reject,
}

impl KeyCollisionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyCollisionPolicy::Overwrite => "overwrite",
            KeyCollisionPolicy::Reject => "reject",
        }
    }

    /// Policy selected by a `strict` flag.
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            KeyCollisionPolicy::Reject
        } else {
            KeyCollisionPolicy::Overwrite
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_overwrite() {
        assert_eq!(KeyCollisionPolicy::default(), KeyCollisionPolicy::Overwrite);
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&KeyCollisionPolicy::Reject).unwrap();
        assert_eq!(json, "\"reject\"");
        let decoded: KeyCollisionPolicy = serde_json::from_str("\"overwrite\"").unwrap();
        assert_eq!(decoded, KeyCollisionPolicy::Overwrite);
    }

    #[test]
    fn test_from_strict() {
        assert_eq!(KeyCollisionPolicy::from_strict(true), KeyCollisionPolicy::Reject);
        assert_eq!(KeyCollisionPolicy::from_strict(false).as_str(), "overwrite");
    }
}
