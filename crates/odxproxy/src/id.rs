//! Request identifier generation

use std::fmt::Debug;
use uuid::Uuid;

/// Source of request identifiers.
///
/// Implementations must return a non-empty value that is unique across
/// calls. Values should sort in creation order.
pub trait IdGenerator: Send + Sync + Debug {
    /// Produce a fresh identifier.
    fn generate(&self) -> String;
}

/// Time-ordered UUIDv7 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV7Generator;

impl IdGenerator for UuidV7Generator {
    fn generate(&self) -> String {
        Uuid::now_v7().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_ids_are_unique_and_non_empty() {
        let generator = UuidV7Generator;
        let ids: HashSet<String> = (0..1000).map(|_| generator.generate()).collect();

        assert_eq!(ids.len(), 1000);
        assert!(ids.iter().all(|id| !id.is_empty()));
    }

    #[test]
    fn test_generated_ids_parse_as_v7() {
        let id = UuidV7Generator.generate();
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 7);
    }
}
