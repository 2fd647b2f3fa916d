//! The [`ExportPath`] entity: one candidate export snapshot.

use std::cmp::Ordering;

/// One candidate export snapshot: where it lives and which version it is.
///
/// `location` is an opaque identifier, a filesystem path or an
/// object-storage key; the engine never interprets it beyond identity.
/// `export_version` is the retention ordering key; producers emit
/// non-negative, monotonically increasing versions, though the engine only
/// requires a total order.
///
/// Both fields are immutable once constructed. Two values are equal iff
/// both fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExportPath {
    /// Where the snapshot lives.
    pub location: String,

    /// The snapshot's position in the producer's numbering sequence.
    pub export_version: i64,
}

impl ExportPath {
    pub fn new(location: impl Into<String>, export_version: i64) -> Self {
        Self {
            location: location.into(),
            export_version,
        }
    }
}

impl Ord for ExportPath {
    /// Ascending by version. Location breaks ties so that sorting stays
    /// total and deterministic even if a caller feeds duplicate versions.
    fn cmp(&self, other: &Self) -> Ordering {
        self.export_version
            .cmp(&other.export_version)
            .then_with(|| self.location.cmp(&other.location))
    }
}

impl PartialOrd for ExportPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_requires_both_fields() {
        let a = ExportPath::new("/exports/3", 3);
        assert_eq!(a, ExportPath::new("/exports/3", 3));
        assert_ne!(a, ExportPath::new("/exports/3", 4));
        assert_ne!(a, ExportPath::new("/exports/4", 3));
    }

    #[test]
    fn test_orders_by_version() {
        let mut paths = vec![
            ExportPath::new("/exports/10", 10),
            ExportPath::new("/exports/2", 2),
            ExportPath::new("/exports/33", 33),
        ];
        paths.sort();
        let versions: Vec<i64> = paths.iter().map(|p| p.export_version).collect();
        assert_eq!(versions, vec![2, 10, 33]);
    }

    #[test]
    fn test_location_breaks_version_ties() {
        let mut paths = vec![ExportPath::new("/b/7", 7), ExportPath::new("/a/7", 7)];
        paths.sort();
        assert_eq!(paths[0].location, "/a/7");
        assert_eq!(paths[1].location, "/b/7");
    }
}
