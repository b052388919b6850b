//! Scan domain entities

use chrono::{DateTime, Utc};

/// A named network segment eligible for discovery scanning.
///
/// Immutable after load; the range string is passed to the discovery tool
/// verbatim, so it must use the tool's own target syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub name: String,
    pub range: String,
}

impl Segment {
    pub fn new(name: impl Into<String>, range: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            range: range.into(),
        }
    }
}

/// The outcome of a completed scan, returned to the caller and not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub segment_name: String,
    pub range: String,
    pub scanned_at: DateTime<Utc>,
    pub reachable_hosts: Vec<String>,
    /// Always equals `reachable_hosts.len()`; enforced by construction
    pub host_count: usize,
}

impl ScanResult {
    /// Assembles the result for a scan of `segment` that observed `hosts`,
    /// stamped with the current time.
    pub fn new(segment: &Segment, hosts: Vec<String>) -> Self {
        Self {
            segment_name: segment.name.clone(),
            range: segment.range.clone(),
            scanned_at: Utc::now(),
            host_count: hosts.len(),
            reachable_hosts: hosts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_count_matches_host_list_length() {
        let segment = Segment::new("vlan7", "10.0.7.0/24");

        let empty = ScanResult::new(&segment, vec![]);
        assert_eq!(empty.host_count, 0);
        assert!(empty.reachable_hosts.is_empty());

        let three = ScanResult::new(
            &segment,
            vec!["10.0.7.1".into(), "10.0.7.2".into(), "10.0.7.2".into()],
        );
        assert_eq!(three.host_count, 3);
        assert_eq!(three.host_count, three.reachable_hosts.len());
    }

    #[test]
    fn result_carries_segment_name_and_range() {
        let segment = Segment::new("office", "192.168.10.0/24");
        let result = ScanResult::new(&segment, vec!["192.168.10.4".into()]);
        assert_eq!(result.segment_name, "office");
        assert_eq!(result.range, "192.168.10.0/24");
    }
}
