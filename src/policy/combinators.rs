//! Combinators that build new policies out of existing ones.
//!
//! Both operate on the *results* of their operands, never on raw paths:
//! [`union`] applies each operand to the original input and merges the two
//! kept sets, and [`negation`] inverts which entries a policy retains.

use std::collections::HashSet;

use crate::path::ExportPath;
use crate::policy::{BoxedPolicy, RetentionPolicy};

/// Keep everything either policy keeps.
///
/// Both policies see the original input; this is not sequential
/// composition. The merged result is deduplicated by [`ExportPath`]
/// equality and returned ascending by version.
pub fn union(a: BoxedPolicy, b: BoxedPolicy) -> BoxedPolicy {
    Box::new(move |paths: &[ExportPath]| {
        let mut kept = a.keep(paths);
        let seen: HashSet<ExportPath> = kept.iter().cloned().collect();
        kept.extend(b.keep(paths).into_iter().filter(|p| !seen.contains(p)));
        kept.sort();
        kept
    })
}

/// Keep exactly the entries `policy` would discard.
///
/// Input order is preserved, so `negation(p).keep(paths)` is `paths` minus
/// `p.keep(paths)` as an ordered sequence.
pub fn negation(policy: BoxedPolicy) -> BoxedPolicy {
    Box::new(move |paths: &[ExportPath]| {
        let kept: HashSet<ExportPath> = policy.keep(paths).into_iter().collect();
        paths
            .iter()
            .filter(|p| !kept.contains(*p))
            .cloned()
            .collect()
    })
}
