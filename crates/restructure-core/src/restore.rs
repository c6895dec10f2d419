//! Inverse transform: put extracted vectors back where they came from.

use std::collections::HashSet;

use serde_json::Value;
use tracing::debug;

use restructure_types::{RestructureError, ID_SUFFIX};

use crate::restructurer::RestructuringResult;
use crate::store::VectorStore;
use crate::walk::{walk, EntryRewriter, Rewrite};

/// Rebuild the original document from one restructuring result.
///
/// An entry `<key>_id: "<ref>"` whose reference is in the store becomes
/// `<key>: <vector>` at the same position, and the vector is consumed.
/// `<key>` may be empty (`"_id"` restores to `""`).
///
/// Fails if a reference string shows up under a second `_id` key (a plain
/// string in the source document can spell a generated reference), or if
/// any stored vector is never referenced.
pub fn restore(result: RestructuringResult) -> Result<Value, RestructureError> {
    let mut run = Restoration {
        store: result.vectors,
        taken: HashSet::new(),
    };
    let document = walk(result.data, &mut run)?;

    if !run.store.is_empty() {
        let orphans = run.store.ids().map(str::to_string).collect();
        return Err(RestructureError::UnreferencedVectors(orphans));
    }
    debug!(restored = run.taken.len(), "Restored document");
    Ok(document)
}

struct Restoration {
    store: VectorStore,
    // References already put back.
    taken: HashSet<String>,
}

impl EntryRewriter for Restoration {
    fn rewrite_entry(&mut self, key: String, value: Value) -> Result<Rewrite, RestructureError> {
        if let (Some(base), Value::String(id)) = (key.strip_suffix(ID_SUFFIX), &value) {
            if self.taken.contains(id) {
                return Err(RestructureError::AmbiguousReference {
                    key,
                    reference: id.clone(),
                });
            }
            if let Some(vector) = self.store.take(id) {
                self.taken.insert(id.clone());
                return Ok(Rewrite::Emit(base.to_string(), vector));
            }
        }
        Ok(Rewrite::Descend(key, value))
    }
}
