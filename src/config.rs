//! Declarative policy configuration.
//!
//! Lets deployments describe their retention rules in TOML instead of
//! composing policies in code. Every configured rule is applied to the
//! same candidate list and the results are unioned, so the config below
//! keeps the five newest exports plus one per block of twenty versions:
//!
//! ```toml
//! keep_largest = 5
//! keep_one_per_interval = 20
//! ```
//!
//! Embedded in a larger config file this is typically a `[policy]` table.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::policy::{self, BoxedPolicy, PolicyError, PolicyResult};

/// Declarative retention rules.
///
/// Each field switches on one primitive policy; [`build`](Self::build)
/// unions whichever are set. All fields default to off, and a config that
/// enables nothing is rejected at build time rather than silently keeping
/// (or discarding) everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    /// Keep the N highest-versioned exports.
    #[serde(default)]
    pub keep_largest: Option<usize>,

    /// Keep every export whose version is divisible by N.
    #[serde(default)]
    pub keep_modulo: Option<i64>,

    /// Keep the highest-versioned export in each block of N versions.
    #[serde(default)]
    pub keep_one_per_interval: Option<i64>,
}

impl PolicyConfig {
    /// Check if any retention rule is configured.
    pub fn has_any_rule(&self) -> bool {
        self.keep_largest.is_some()
            || self.keep_modulo.is_some()
            || self.keep_one_per_interval.is_some()
    }

    /// Build the composed policy: the union of every configured rule.
    ///
    /// Rule arguments are validated by the primitive constructors, so a
    /// zero interval fails here rather than at apply time.
    pub fn build(&self) -> PolicyResult<BoxedPolicy> {
        let mut rules: Vec<BoxedPolicy> = Vec::new();
        if let Some(n) = self.keep_largest {
            rules.push(policy::largest_export_versions(n)?);
        }
        if let Some(n) = self.keep_modulo {
            rules.push(policy::mod_export_version(n)?);
        }
        if let Some(n) = self.keep_one_per_interval {
            rules.push(policy::one_of_every_n_export_versions(n)?);
        }

        debug!(rules = rules.len(), "building configured retention policy");

        let mut rules = rules.into_iter();
        let first = rules.next().ok_or(PolicyError::NoRules)?;
        Ok(rules.fold(first, policy::union))
    }
}
