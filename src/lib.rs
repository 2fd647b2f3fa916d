//! Retention-policy engine for versioned export snapshots.
//!
//! Systems that periodically produce numbered export directories (model
//! checkpoints, saved-model exports, backup generations) eventually have
//! to prune old ones without deleting recent or strategically spaced
//! history. This crate decides *which* snapshots to keep; the caller owns
//! listing backends beyond the built-in ones, and owns the deletion of
//! whatever is not kept.
//!
//! The pieces:
//!
//! - [`ExportPath`]: one candidate snapshot, a location plus its version
//! - [`policy`]: primitive retention rules ([`largest_export_versions`],
//!   [`mod_export_version`], [`one_of_every_n_export_versions`]) and the
//!   combinators ([`union`], [`negation`]) that compose them
//! - [`get_paths`]: discovery, which lists a base location, parses versions
//!   out of its children, and produces the ordered candidate list policies
//!   consume
//! - [`PolicyConfig`]: the same rules, driven from TOML
//!
//! Every policy is a pure function of the path list it is handed; nothing
//! is cached or persisted between calls.
//!
//! # Example
//!
//! ```
//! use snapkeep::policy::{largest_export_versions, mod_export_version, union};
//! use snapkeep::{RetentionPolicy, StaticLister, get_paths, version_suffix_parser};
//!
//! let mut lister = StaticLister::new();
//! lister.insert("exports", ["0", "3", "6", "7", "ignore"]);
//!
//! let paths = get_paths(&lister, "exports", version_suffix_parser("exports"))?;
//!
//! // Keep the two newest exports plus every sixth version.
//! let policy = union(largest_export_versions(2)?, mod_export_version(6)?);
//! let kept: Vec<i64> = policy.keep(&paths).iter().map(|p| p.export_version).collect();
//! assert_eq!(kept, vec![0, 6, 7]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod discovery;
pub mod parsers;
pub mod path;
pub mod policy;

pub use config::PolicyConfig;
pub use discovery::{
    DiscoveryError, DiscoveryResult, ExportParser, FilesystemLister, ListChildren, StaticLister,
    get_paths,
};
pub use parsers::version_suffix_parser;
pub use path::ExportPath;
pub use policy::{
    BoxedPolicy, PolicyError, PolicyResult, RetentionPolicy, largest_export_versions,
    mod_export_version, negation, one_of_every_n_export_versions, union,
};
