//! Explicit-stack document walker.
//!
//! Rewrites a JSON tree in pre-order, depth-first, visiting mapping
//! entries in key order. Frames live on a heap-allocated stack, so
//! arbitrarily deep input cannot overflow the thread stack.
//!
//! The walker owns the tree shape; an [`EntryRewriter`] decides what
//! happens to each mapping entry. Array elements are always descended
//! into and never offered to the rewriter.

use serde_json::{map, Map, Value};

use restructure_types::RestructureError;

/// Decision for a single mapping entry.
#[derive(Debug, PartialEq)]
pub enum Rewrite {
    /// Emit this key/value as-is without walking the value.
    Emit(String, Value),
    /// Walk the value, then emit the result under this key.
    Descend(String, Value),
}

/// Per-entry hook driven by [`walk`].
pub trait EntryRewriter {
    /// Called once per mapping, before any of its entries.
    fn begin_object(&mut self, _object: &Map<String, Value>) -> Result<(), RestructureError> {
        Ok(())
    }

    /// Called for every mapping entry, in key order.
    fn rewrite_entry(&mut self, key: String, value: Value) -> Result<Rewrite, RestructureError>;

    /// Called when an emitted key replaces one already written to the same mapping.
    fn overwritten(&mut self, _key: &str) {}
}

enum Frame {
    Object {
        entries: map::IntoIter,
        out: Map<String, Value>,
        // Key of the child currently being walked.
        pending: String,
    },
    Array {
        items: std::vec::IntoIter<Value>,
        out: Vec<Value>,
    },
}

enum Step {
    Descend(Value),
    Finished(Value),
}

impl Frame {
    /// Advance to the next child that needs walking, emitting entries the
    /// rewriter settles directly. `None` once the container is exhausted.
    fn next_child<R: EntryRewriter>(
        &mut self,
        rewriter: &mut R,
    ) -> Result<Option<Value>, RestructureError> {
        match self {
            Frame::Object {
                entries,
                out,
                pending,
            } => {
                for (key, value) in entries.by_ref() {
                    match rewriter.rewrite_entry(key, value)? {
                        Rewrite::Emit(key, value) => emit(out, key, value, rewriter),
                        Rewrite::Descend(key, value) => {
                            *pending = key;
                            return Ok(Some(value));
                        }
                    }
                }
                Ok(None)
            }
            Frame::Array { items, .. } => Ok(items.next()),
        }
    }

    /// Attach a finished child under the pending key or at the array tail.
    fn attach<R: EntryRewriter>(&mut self, child: Value, rewriter: &mut R) {
        match self {
            Frame::Object { out, pending, .. } => {
                let key = std::mem::take(pending);
                emit(out, key, child, rewriter);
            }
            Frame::Array { out, .. } => out.push(child),
        }
    }

    fn finish(self) -> Value {
        match self {
            Frame::Object { out, .. } => Value::Object(out),
            Frame::Array { out, .. } => Value::Array(out),
        }
    }
}

fn emit<R: EntryRewriter>(out: &mut Map<String, Value>, key: String, value: Value, rewriter: &mut R) {
    if out.contains_key(&key) {
        rewriter.overwritten(&key);
    }
    // With preserve_order an existing key keeps its position.
    out.insert(key, value);
}

fn resume<R: EntryRewriter>(
    mut frame: Frame,
    stack: &mut Vec<Frame>,
    rewriter: &mut R,
) -> Result<Step, RestructureError> {
    match frame.next_child(rewriter)? {
        Some(child) => {
            stack.push(frame);
            Ok(Step::Descend(child))
        }
        None => Ok(Step::Finished(frame.finish())),
    }
}

/// Rewrite `root`, consulting `rewriter` for every mapping entry.
pub fn walk<R: EntryRewriter>(root: Value, rewriter: &mut R) -> Result<Value, RestructureError> {
    let mut stack: Vec<Frame> = Vec::new();
    let mut step = Step::Descend(root);

    loop {
        step = match step {
            Step::Descend(Value::Object(object)) => {
                rewriter.begin_object(&object)?;
                let frame = Frame::Object {
                    out: Map::with_capacity(object.len()),
                    entries: object.into_iter(),
                    pending: String::new(),
                };
                resume(frame, &mut stack, rewriter)?
            }
            Step::Descend(Value::Array(items)) => {
                let frame = Frame::Array {
                    out: Vec::with_capacity(items.len()),
                    items: items.into_iter(),
                };
                resume(frame, &mut stack, rewriter)?
            }
            Step::Descend(scalar) => Step::Finished(scalar),
            Step::Finished(value) => match stack.pop() {
                None => return Ok(value),
                Some(mut parent) => {
                    parent.attach(value, rewriter);
                    resume(parent, &mut stack, rewriter)?
                }
            },
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    /// Records visit order and uppercases string values under `shout`.
    #[derive(Default)]
    struct Recorder {
        visited: Vec<String>,
        objects: usize,
        overwritten: Vec<String>,
    }

    impl EntryRewriter for Recorder {
        fn begin_object(&mut self, _object: &Map<String, Value>) -> Result<(), RestructureError> {
            self.objects += 1;
            Ok(())
        }

        fn rewrite_entry(&mut self, key: String, value: Value) -> Result<Rewrite, RestructureError> {
            self.visited.push(key.clone());
            match (key.as_str(), &value) {
                ("shout", Value::String(s)) => Ok(Rewrite::Emit(key, json!(s.to_uppercase()))),
                ("rename", _) => Ok(Rewrite::Emit("first".to_string(), value)),
                _ => Ok(Rewrite::Descend(key, value)),
            }
        }

        fn overwritten(&mut self, key: &str) {
            self.overwritten.push(key.to_string());
        }
    }

    struct Failing;

    impl EntryRewriter for Failing {
        fn rewrite_entry(&mut self, key: String, _value: Value) -> Result<Rewrite, RestructureError> {
            Err(RestructureError::Config(key))
        }
    }

    #[test]
    fn test_scalars_pass_through() {
        let mut recorder = Recorder::default();
        for value in [json!(null), json!(true), json!(3), json!(2.5), json!("s")] {
            assert_eq!(walk(value.clone(), &mut recorder).unwrap(), value);
        }
        assert!(recorder.visited.is_empty());
    }

    #[test]
    fn test_preorder_key_order() {
        let input = json!({
            "b": {"z": 1, "y": [{"x": 2}, {"w": 3}]},
            "a": 4
        });
        let mut recorder = Recorder::default();
        let output = walk(input.clone(), &mut recorder).unwrap();

        assert_eq!(output, input);
        assert_eq!(recorder.visited, ["b", "z", "y", "x", "w", "a"]);
        assert_eq!(recorder.objects, 4);
    }

    #[test]
    fn test_emit_skips_descent() {
        let input = json!({"list": [{"shout": "hi"}, "shout"], "shout": "top"});
        let mut recorder = Recorder::default();
        let output = walk(input, &mut recorder).unwrap();

        assert_eq!(output, json!({"list": [{"shout": "HI"}, "shout"], "shout": "TOP"}));
    }

    #[test]
    fn test_overwrite_keeps_first_position() {
        let input = json!({"first": 1, "middle": 2, "rename": 3});
        let mut recorder = Recorder::default();
        let output = walk(input, &mut recorder).unwrap();

        assert_eq!(recorder.overwritten, ["first"]);
        let keys: Vec<&String> = output.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["first", "middle"]);
        assert_eq!(output["first"], json!(3));
    }

    #[test]
    fn test_error_aborts_walk() {
        let err = walk(json!([1, {"bad": 2}]), &mut Failing).unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: bad");
    }

    #[test]
    fn test_nested_arrays_keep_shape() {
        let input = json!([[1, [2, [3, []]]], {}, []]);
        let output = walk(input.clone(), &mut Recorder::default()).unwrap();
        assert_eq!(output, input);
    }
}
