//! Discovery: turning raw directory listings into the canonical
//! [`ExportPath`] sequence that policies consume.
//!
//! [`get_paths`] lists the immediate children of a base location, asks a
//! caller-supplied parser which ones are exports, and returns the accepted
//! paths ascending by version. Children the parser rejects are silently
//! skipped: an unrelated directory next to the exports is normal, not an
//! error.

mod lister;

pub use lister::{
    DiscoveryError, DiscoveryResult, FilesystemLister, ListChildren, StaticLister,
};
use tracing::{debug, instrument};

use crate::path::ExportPath;

/// Caller-supplied parser: decides whether a candidate location is an
/// export and, if so, extracts its version.
///
/// The candidate handed to [`parse`](ExportParser::parse) is the joined
/// `base/child` location with any trailing separator already stripped. The
/// engine performs no version interpretation of its own. Returning
/// `None` means "not an export" and is indistinguishable from the child
/// never having existed.
///
/// Parsers must be deterministic and side-effect-free. Any
/// `Fn(&str) -> Option<ExportPath>` closure qualifies.
pub trait ExportParser {
    fn parse(&self, candidate: &str) -> Option<ExportPath>;
}

impl<F> ExportParser for F
where
    F: Fn(&str) -> Option<ExportPath>,
{
    fn parse(&self, candidate: &str) -> Option<ExportPath> {
        self(candidate)
    }
}

/// List `base_location`'s children, parse each into an export candidate,
/// and return the accepted paths sorted ascending by version.
///
/// Child names with one trailing `/` (object-storage listings mark
/// "directories" that way) are normalized before the parser sees them.
/// Listing failures propagate unmodified; an empty listing is an empty
/// result, not an error.
#[instrument(skip(lister, parser), fields(backend = lister.backend_name()))]
pub fn get_paths<P: ExportParser>(
    lister: &dyn ListChildren,
    base_location: &str,
    parser: P,
) -> DiscoveryResult<Vec<ExportPath>> {
    let base = base_location.strip_suffix('/').unwrap_or(base_location);
    let children = lister.list_children(base_location)?;
    let listed = children.len();

    let mut paths = Vec::with_capacity(listed);
    for child in children {
        let name = child.strip_suffix('/').unwrap_or(&child);
        let candidate = format!("{base}/{name}");
        match parser.parse(&candidate) {
            Some(path) => paths.push(path),
            None => debug!(candidate = %candidate, "child is not an export, skipping"),
        }
    }
    paths.sort();

    debug!(listed, exports = paths.len(), "discovered exports");
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::parsers::version_suffix_parser;

    fn versions_of(paths: &[ExportPath]) -> Vec<i64> {
        paths.iter().map(|p| p.export_version).collect()
    }

    #[test]
    fn test_get_paths_with_parse() {
        let temp_dir = TempDir::new().unwrap();
        for version in 0..3 {
            std::fs::create_dir(temp_dir.path().join(version.to_string())).unwrap();
        }
        // An unrelated directory the parser should skip.
        std::fs::create_dir(temp_dir.path().join("ignore")).unwrap();

        let base = temp_dir.path().to_str().unwrap();
        let paths = get_paths(&FilesystemLister::new(), base, version_suffix_parser(base)).unwrap();

        assert_eq!(
            paths,
            vec![
                ExportPath::new(format!("{base}/0"), 0),
                ExportPath::new(format!("{base}/1"), 1),
                ExportPath::new(format!("{base}/2"), 2),
            ]
        );
    }

    #[test]
    fn test_get_paths_strips_object_storage_separators() {
        let base = "store://bucket/foo";
        let mut lister = StaticLister::new();
        lister.insert(base, ["0/", "1/"]);

        let paths = get_paths(&lister, base, version_suffix_parser(base)).unwrap();
        assert_eq!(
            paths,
            vec![
                ExportPath::new("store://bucket/foo/0", 0),
                ExportPath::new("store://bucket/foo/1", 1),
            ]
        );
    }

    #[test]
    fn test_get_paths_returns_ascending_versions() {
        let base = "exports";
        let mut lister = StaticLister::new();
        lister.insert(base, ["10", "2", "33"]);

        let paths = get_paths(&lister, base, version_suffix_parser(base)).unwrap();
        assert_eq!(versions_of(&paths), vec![2, 10, 33]);
    }

    #[test]
    fn test_get_paths_normalizes_trailing_separator_on_base() {
        let mut lister = StaticLister::new();
        lister.insert("exports/", ["7"]);

        let paths = get_paths(&lister, "exports/", version_suffix_parser("exports")).unwrap();
        assert_eq!(paths, vec![ExportPath::new("exports/7", 7)]);
    }

    #[test]
    fn test_get_paths_empty_listing_is_empty_result() {
        let mut lister = StaticLister::new();
        lister.insert("exports", Vec::<String>::new());

        let paths = get_paths(&lister, "exports", version_suffix_parser("exports")).unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn test_get_paths_propagates_listing_failure() {
        let lister = StaticLister::new();
        let result = get_paths(&lister, "exports", version_suffix_parser("exports"));
        assert!(matches!(result, Err(DiscoveryError::UnknownBase(_))));
    }

    #[test]
    fn test_get_paths_accepts_closure_parsers() {
        let mut lister = StaticLister::new();
        lister.insert("exports", ["a", "b"]);

        // Versions assigned by name length, just to prove any closure works.
        let parser =
            |candidate: &str| Some(ExportPath::new(candidate, candidate.len() as i64));
        let paths = get_paths(&lister, "exports", parser).unwrap();
        assert_eq!(paths.len(), 2);
    }
}
