//! Vector extraction.
//!
//! Every mapping value that passes [`is_vector`] is moved into the
//! [`VectorStore`] under a fresh reference, and the entry is re-emitted as
//! `<key>_id: "<reference>"`. Everything else is rebuilt unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use restructure_types::{
    KeyCollisionPolicy, RestructureError, Settings, DATA_KEY, VECTORS_KEY,
};

use crate::detect::{is_vector, Threshold};
use crate::id::IdGenerator;
use crate::store::VectorStore;
use crate::walk::{walk, EntryRewriter, Rewrite};
use crate::derived_key;

/// Outcome of one restructuring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestructuringResult {
    /// Input document with vectors replaced by references
    pub data: Value,
    /// Extracted vectors keyed by reference
    pub vectors: VectorStore,
}

impl RestructuringResult {
    pub fn vector_count(&self) -> usize {
        self.vectors.len()
    }

    pub fn total_elements(&self) -> usize {
        self.vectors.total_elements()
    }

    /// The `{"data": ..., "vectors": ...}` envelope.
    pub fn into_value(self) -> Value {
        let mut envelope = Map::with_capacity(2);
        envelope.insert(DATA_KEY.to_string(), self.data);
        envelope.insert(VECTORS_KEY.to_string(), self.vectors.into());
        Value::Object(envelope)
    }

    /// Parse an envelope previously produced by [`RestructuringResult::into_value`].
    pub fn from_value(value: Value) -> Result<Self, RestructureError> {
        let Value::Object(mut envelope) = value else {
            return Err(RestructureError::MalformedResult(
                "expected a JSON object at the top level".to_string(),
            ));
        };
        let data = envelope.remove(DATA_KEY).ok_or_else(|| {
            RestructureError::MalformedResult(format!("missing '{}' key", DATA_KEY))
        })?;
        let vectors = match envelope.remove(VECTORS_KEY) {
            Some(Value::Object(entries)) => VectorStore::try_from(entries)?,
            Some(_) => {
                return Err(RestructureError::MalformedResult(format!(
                    "'{}' must be a JSON object",
                    VECTORS_KEY
                )))
            }
            None => {
                return Err(RestructureError::MalformedResult(format!(
                    "missing '{}' key",
                    VECTORS_KEY
                )))
            }
        };
        Ok(Self { data, vectors })
    }
}

/// Configured extractor. Holds no per-run state, so one instance can be
/// reused for any number of runs.
#[derive(Debug, Clone, Default)]
pub struct Restructurer {
    threshold: Threshold,
    policy: KeyCollisionPolicy,
}

impl Restructurer {
    /// Create a restructurer; fails when `threshold` is not positive.
    pub fn new(threshold: i64) -> Result<Self, RestructureError> {
        Ok(Self {
            threshold: Threshold::new(threshold)?,
            policy: KeyCollisionPolicy::default(),
        })
    }

    /// Build from loaded settings (threshold and collision policy).
    pub fn from_settings(settings: &Settings) -> Result<Self, RestructureError> {
        settings.validate()?;
        Ok(Self::new(settings.threshold)?.with_policy(settings.collision_policy()))
    }

    pub fn with_policy(mut self, policy: KeyCollisionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn policy(&self) -> KeyCollisionPolicy {
        self.policy
    }

    /// Extract every vector in `document`.
    ///
    /// References are assigned `vec_0, vec_1, ...` in pre-order discovery
    /// order, so identical input yields identical output.
    pub fn restructure(&self, document: Value) -> Result<RestructuringResult, RestructureError> {
        let mut run = Extraction {
            threshold: self.threshold,
            policy: self.policy,
            ids: IdGenerator::new(),
            store: VectorStore::new(),
        };
        let data = walk(document, &mut run)?;

        info!(
            vectors = run.store.len(),
            threshold = self.threshold.get(),
            "Restructured document"
        );
        Ok(RestructuringResult {
            data,
            vectors: run.store,
        })
    }
}

/// Per-run accumulator.
struct Extraction {
    threshold: Threshold,
    policy: KeyCollisionPolicy,
    ids: IdGenerator,
    store: VectorStore,
}

impl EntryRewriter for Extraction {
    fn begin_object(&mut self, object: &Map<String, Value>) -> Result<(), RestructureError> {
        if self.policy != KeyCollisionPolicy::Reject {
            return Ok(());
        }
        for (key, value) in object {
            if !is_vector(value, self.threshold) {
                continue;
            }
            let derived = derived_key(key);
            // A vector under `<key>_id` is itself emitted as `<key>_id_id`.
            let kept = object
                .get(&derived)
                .is_some_and(|existing| !is_vector(existing, self.threshold));
            if kept {
                return Err(RestructureError::KeyCollision {
                    key: key.clone(),
                    derived,
                });
            }
        }
        Ok(())
    }

    fn rewrite_entry(&mut self, key: String, value: Value) -> Result<Rewrite, RestructureError> {
        if !is_vector(&value, self.threshold) {
            return Ok(Rewrite::Descend(key, value));
        }
        let id = self.ids.next_id();
        debug!(key = %key, id = %id, len = value.as_array().map_or(0, Vec::len), "Extracted vector");
        self.store.insert(id.clone(), value);
        Ok(Rewrite::Emit(derived_key(&key), Value::String(id)))
    }

    fn overwritten(&mut self, key: &str) {
        warn!(key = %key, "Key written twice in one mapping, keeping the later value");
    }
}
