//! In-memory segment registry

use std::collections::HashMap;

use crate::config::SegmentConfig;
use crate::domain::entities::Segment;

/// Mapping from segment name to [`Segment`], built once at startup and
/// read-only afterwards. Name uniqueness and non-emptiness are enforced by
/// configuration validation before this is constructed.
#[derive(Debug, Clone)]
pub struct SegmentRegistry {
    segments: HashMap<String, Segment>,
}

impl SegmentRegistry {
    pub fn from_config(entries: &[SegmentConfig]) -> Self {
        let segments = entries
            .iter()
            .map(|e| (e.name.clone(), Segment::new(&e.name, &e.range)))
            .collect();
        Self { segments }
    }

    /// Exact-match, case-sensitive lookup. A miss is a normal outcome, not
    /// an error.
    pub fn lookup(&self, name: &str) -> Option<&Segment> {
        self.segments.get(name)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> SegmentRegistry {
        SegmentRegistry::from_config(&[
            SegmentConfig {
                name: "testvlan111".into(),
                range: "127.0.0.50-250".into(),
            },
            SegmentConfig {
                name: "office".into(),
                range: "192.168.10.0/24".into(),
            },
        ])
    }

    #[test]
    fn lookup_returns_configured_range() {
        let registry = registry();
        let segment = registry.lookup("testvlan111").unwrap();
        assert_eq!(segment.range, "127.0.0.50-250");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let registry = registry();
        assert!(registry.lookup("TESTVLAN111").is_none());
    }

    #[test]
    fn unknown_and_empty_names_miss() {
        let registry = registry();
        assert!(registry.lookup("INVALIDVLAN").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn registry_len_matches_config() {
        assert_eq!(registry().len(), 2);
    }
}
