//! Composable retention policies over export snapshots.
//!
//! A policy is a pure function from an ordered sequence of [`ExportPath`]
//! to an order-preserving subset of that sequence. Policies never invent
//! entries absent from their input, duplicate entries, or reorder them;
//! that closure property is what lets [`union`] and [`negation`] operate
//! purely on policy results.
//!
//! Policies are values: anything implementing [`RetentionPolicy`] works,
//! including plain closures via the blanket impl. The constructors in this
//! module return boxed policies and validate their arguments up front, so
//! a misconfigured interval fails at construction rather than silently
//! misbehaving at apply time.

mod combinators;

pub use combinators::{negation, union};

use std::collections::HashMap;

use thiserror::Error;

use crate::path::ExportPath;

/// Errors from policy construction.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("keep count must be at least 1, got {0}")]
    InvalidKeepCount(usize),

    #[error("version interval must be at least 1, got {0}")]
    InvalidInterval(i64),

    #[error("policy configuration enables no retention rule")]
    NoRules,
}

pub type PolicyResult<T> = Result<T, PolicyError>;

/// A retention rule: given every candidate export, pick the ones to keep.
///
/// Implementations must be `Send + Sync` so composed policies can be shared
/// across threads; purity is part of the contract, so there is nothing to
/// synchronize.
pub trait RetentionPolicy: Send + Sync {
    /// Return the subset of `paths` this policy retains.
    fn keep(&self, paths: &[ExportPath]) -> Vec<ExportPath>;
}

impl<F> RetentionPolicy for F
where
    F: Fn(&[ExportPath]) -> Vec<ExportPath> + Send + Sync,
{
    fn keep(&self, paths: &[ExportPath]) -> Vec<ExportPath> {
        self(paths)
    }
}

pub type BoxedPolicy = Box<dyn RetentionPolicy>;

/// Keep the `n` entries with the highest export versions.
///
/// Output stays ascending by version. Inputs with fewer than `n` entries
/// are kept in full.
pub fn largest_export_versions(n: usize) -> PolicyResult<BoxedPolicy> {
    if n == 0 {
        return Err(PolicyError::InvalidKeepCount(n));
    }
    Ok(Box::new(move |paths: &[ExportPath]| {
        let mut sorted = paths.to_vec();
        sorted.sort();
        let cut = sorted.len().saturating_sub(n);
        sorted.split_off(cut)
    }))
}

/// Keep every entry whose export version is divisible by `n`.
///
/// Version 0 is divisible by everything and is always kept. Input order is
/// preserved.
pub fn mod_export_version(n: i64) -> PolicyResult<BoxedPolicy> {
    if n < 1 {
        return Err(PolicyError::InvalidInterval(n));
    }
    Ok(Box::new(move |paths: &[ExportPath]| {
        paths
            .iter()
            .filter(|p| p.export_version % n == 0)
            .cloned()
            .collect()
    }))
}

/// Keep one entry per version interval `[0, n], (n, 2n], (2n, 3n], ...`:
/// the highest-versioned entry in each interval that has any.
///
/// Version 0 belongs to the first interval alongside versions `1..=n`; it
/// does not get a zero-width bucket of its own. Output is ascending by
/// version.
pub fn one_of_every_n_export_versions(n: i64) -> PolicyResult<BoxedPolicy> {
    if n < 1 {
        return Err(PolicyError::InvalidInterval(n));
    }
    Ok(Box::new(move |paths: &[ExportPath]| {
        // bucket -> highest entry seen in that bucket
        let mut keepers: HashMap<i64, &ExportPath> = HashMap::new();
        for path in paths {
            let bucket = if path.export_version == 0 {
                0
            } else {
                (path.export_version - 1) / n
            };
            let slot = keepers.entry(bucket).or_insert(path);
            if path > *slot {
                *slot = path;
            }
        }
        let mut kept: Vec<ExportPath> = keepers.into_values().cloned().collect();
        kept.sort();
        kept
    }))
}
