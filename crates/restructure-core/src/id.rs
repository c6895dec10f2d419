//! Reference generation.

use restructure_types::ID_PREFIX;

/// Produces `vec_0`, `vec_1`, ... in call order.
///
/// One generator lives for exactly one restructuring run.
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next reference.
    pub fn next_id(&mut self) -> String {
        let id = format!("{}{}", ID_PREFIX, self.next);
        self.next += 1;
        id
    }

    /// Number of references handed out so far.
    pub fn issued(&self) -> u64 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_starts_at_zero_without_gaps() {
        let mut ids = IdGenerator::new();
        let issued: Vec<String> = (0..4).map(|_| ids.next_id()).collect();
        assert_eq!(issued, ["vec_0", "vec_1", "vec_2", "vec_3"]);
        assert_eq!(ids.issued(), 4);
    }

    #[test]
    fn test_fresh_generators_are_independent() {
        let mut a = IdGenerator::new();
        a.next_id();
        a.next_id();
        let mut b = IdGenerator::new();
        assert_eq!(b.next_id(), "vec_0");
        assert_eq!(a.next_id(), "vec_2");
    }
}
