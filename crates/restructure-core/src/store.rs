//! Vector store: reference -> extracted vector, in discovery order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use restructure_types::RestructureError;

/// Extracted vectors keyed by reference.
///
/// Entries are JSON arrays of numbers. Each number keeps its integer or
/// floating-point representation. Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct VectorStore {
    entries: Map<String, Value>,
}

impl VectorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `vector` under `id`. Callers only pass arrays that passed detection.
    pub(crate) fn insert(&mut self, id: String, vector: Value) {
        debug_assert!(vector.is_array());
        self.entries.insert(id, vector);
    }

    /// Remove and return the vector stored under `id`.
    pub fn take(&mut self, id: &str) -> Option<Value> {
        self.entries.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&[Value]> {
        self.entries
            .get(id)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// References in store order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.entries.iter().filter_map(|(id, vector)| {
            vector
                .as_array()
                .map(|items| (id.as_str(), items.as_slice()))
        })
    }

    /// Sum of the lengths of all stored vectors.
    pub fn total_elements(&self) -> usize {
        self.iter().map(|(_, items)| items.len()).sum()
    }
}

impl TryFrom<Map<String, Value>> for VectorStore {
    type Error = RestructureError;

    fn try_from(entries: Map<String, Value>) -> Result<Self, Self::Error> {
        for (id, vector) in &entries {
            let numeric = vector
                .as_array()
                .is_some_and(|items| !items.is_empty() && items.iter().all(Value::is_number));
            if !numeric {
                return Err(RestructureError::MalformedResult(format!(
                    "store entry '{}' is not a non-empty numeric array",
                    id
                )));
            }
        }
        Ok(Self { entries })
    }
}

impl From<VectorStore> for Map<String, Value> {
    fn from(store: VectorStore) -> Self {
        store.entries
    }
}

impl From<VectorStore> for Value {
    fn from(store: VectorStore) -> Self {
        Value::Object(store.entries)
    }
}
