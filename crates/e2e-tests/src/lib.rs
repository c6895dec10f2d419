//! End-to-end test infrastructure for the JSON vector restructurer.
//!
//! Provides a shared TestHarness and document generators for E2E tests
//! covering the full file -> restructure -> file -> restore pipeline.

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};

/// Shared test harness for E2E tests.
///
/// Owns a temp directory; input and output files live inside it.
pub struct TestHarness {
    /// Keeps temp dir alive for the lifetime of the harness
    pub _temp_dir: tempfile::TempDir,
    /// Root of the temp directory
    pub root: PathBuf,
}

impl TestHarness {
    /// Create a new test harness with an empty temp directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Path of `name` inside the harness directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Write `value` as compact JSON and return its path.
    pub fn write_json(&self, name: &str, value: &Value) -> PathBuf {
        self.write_text(name, &value.to_string())
    }

    /// Write raw text and return its path.
    pub fn write_text(&self, name: &str, text: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, text).expect("Failed to write test input");
        path
    }

    /// Read a file written by the pipeline.
    pub fn read_text(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).expect("Failed to read test output")
    }

    pub fn read_json(&self, name: &str) -> Value {
        serde_json::from_str(&self.read_text(name)).expect("Output is not valid JSON")
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// A RAG-style export: documents with chunked text and `dim`-wide embeddings.
///
/// Produces `chunks` embeddings plus one document-level embedding, so any
/// threshold in `3..=dim` extracts `chunks + 1` vectors. Each chunk also
/// carries a two-element `span`, which a threshold of 2 would extract too.
pub fn create_embedding_export(chunks: usize, dim: usize, seed: u64) -> Value {
    let mut rng = StdRng::seed_from_u64(seed);
    let embedding = |rng: &mut StdRng| -> Value {
        Value::Array((0..dim).map(|_| json!(rng.random_range(-1.0f64..1.0))).collect())
    };

    let items: Vec<Value> = (0..chunks)
        .map(|i| {
            json!({
                "chunk": i,
                "text": format!("chunk number {i}"),
                "embedding": embedding(&mut rng),
                "span": [i * 100, i * 100 + 99],
            })
        })
        .collect();

    json!({
        "source": "export.jsonl",
        "model": {"name": "mini-embed", "dim": dim},
        "document_embedding": embedding(&mut rng),
        "chunks": items,
    })
}
