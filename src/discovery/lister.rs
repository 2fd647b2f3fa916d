//! Pluggable listing backends for discovery.
//!
//! Discovery only needs one external capability: "list the immediate
//! children of a base location". This module provides the trait for it and
//! two backends:
//!
//! - **Filesystem**: local directories via blocking `std::fs`
//! - **Static**: fixed in-memory listings, standing in for
//!   object-storage-style stores in tests and demos
//!
//! Backends may return child names with a trailing `/` (object-storage
//! listings commonly append one to mark a "directory"); discovery strips
//! it.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while discovering exports.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("listing failed: {0}")]
    Io(#[from] io::Error),

    #[error("child of {base} has a non-UTF-8 name: {name}")]
    NonUtf8Name { base: String, name: String },

    #[error("no listing registered for base location: {0}")]
    UnknownBase(String),
}

pub type DiscoveryResult<T> = Result<T, DiscoveryError>;

/// Trait for listing the immediate children of a base location.
///
/// Implementations must be `Send + Sync` so a lister can be shared across
/// concurrent discovery calls; the engine itself holds no state between
/// calls.
pub trait ListChildren: Send + Sync {
    /// List immediate children of `base_location`.
    ///
    /// Each entry is either a bare name or a name with exactly one
    /// trailing `/`. Failures propagate unmodified; the engine performs no
    /// retry or recovery.
    fn list_children(&self, base_location: &str) -> DiscoveryResult<Vec<String>>;

    /// Get the backend type name (for logging/debugging).
    fn backend_name(&self) -> &'static str;
}

/// Local filesystem listing backend.
///
/// Entry names are decoded from `OsString` once, here at the boundary;
/// locations are UTF-8 `String`s everywhere else in the crate. A non-UTF-8
/// child name fails the whole listing fast rather than being silently
/// mangled into a location that can never match its own directory.
#[derive(Debug, Default)]
pub struct FilesystemLister;

impl FilesystemLister {
    pub fn new() -> Self {
        Self
    }
}

impl ListChildren for FilesystemLister {
    fn list_children(&self, base_location: &str) -> DiscoveryResult<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(Path::new(base_location))? {
            let entry = entry?;
            let name =
                entry
                    .file_name()
                    .into_string()
                    .map_err(|raw| DiscoveryError::NonUtf8Name {
                        base: base_location.to_string(),
                        name: raw.to_string_lossy().into_owned(),
                    })?;
            names.push(name);
        }
        Ok(names)
    }

    fn backend_name(&self) -> &'static str {
        "filesystem"
    }
}

/// In-memory listing backend with fixed contents.
///
/// Useful for tests and for exercising object-storage-style layouts
/// (`scheme://bucket/prefix` bases, trailing-`/` children) without a real
/// store behind them.
#[derive(Debug, Default)]
pub struct StaticLister {
    listings: HashMap<String, Vec<String>>,
}

impl StaticLister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the children returned for `base_location`.
    pub fn insert(
        &mut self,
        base_location: impl Into<String>,
        children: impl IntoIterator<Item = impl Into<String>>,
    ) {
        self.listings.insert(
            base_location.into(),
            children.into_iter().map(Into::into).collect(),
        );
    }
}

impl ListChildren for StaticLister {
    fn list_children(&self, base_location: &str) -> DiscoveryResult<Vec<String>> {
        self.listings
            .get(base_location)
            .cloned()
            .ok_or_else(|| DiscoveryError::UnknownBase(base_location.to_string()))
    }

    fn backend_name(&self) -> &'static str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_filesystem_lister_lists_children() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("0")).unwrap();
        std::fs::create_dir(temp_dir.path().join("1")).unwrap();

        let lister = FilesystemLister::new();
        let mut names = lister
            .list_children(temp_dir.path().to_str().unwrap())
            .unwrap();
        names.sort();
        assert_eq!(names, vec!["0", "1"]);
    }

    #[test]
    fn test_filesystem_lister_missing_base_is_an_error() {
        let lister = FilesystemLister::new();
        let result = lister.list_children("/definitely/not/a/real/base");
        assert!(matches!(result, Err(DiscoveryError::Io(_))));
    }

    #[test]
    fn test_static_lister_returns_registered_children() {
        let mut lister = StaticLister::new();
        lister.insert("store://bucket/foo", ["0/", "1/"]);

        let names = lister.list_children("store://bucket/foo").unwrap();
        assert_eq!(names, vec!["0/", "1/"]);
    }

    #[test]
    fn test_static_lister_unknown_base() {
        let lister = StaticLister::new();
        let result = lister.list_children("store://bucket/foo");
        assert!(matches!(result, Err(DiscoveryError::UnknownBase(_))));
    }

    #[test]
    fn test_listers_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FilesystemLister>();
        assert_send_sync::<StaticLister>();
    }
}
