//! Stock parsers for common export layouts.

use regex::Regex;

use crate::path::ExportPath;

/// Build a parser that accepts children of `base_location` whose final
/// component is a bare version number.
///
/// Matches `<base>/<digits>` exactly, so `exports/42` parses to version 42
/// while `exports/ignore`, `exports/42-backup`, and children of any other
/// base are all skipped. Digit runs that overflow `i64` are skipped too.
///
/// This covers the layout every numbered-artifact producer observed so far
/// actually uses; anything more exotic can supply its own
/// [`ExportParser`](crate::discovery::ExportParser) closure.
pub fn version_suffix_parser(
    base_location: &str,
) -> impl Fn(&str) -> Option<ExportPath> + Send + Sync + use<> {
    let base = base_location.strip_suffix('/').unwrap_or(base_location);
    let pattern = Regex::new(&format!("^{}/(\\d+)$", regex::escape(base)))
        .expect("escaped base location always forms a valid pattern");

    move |candidate: &str| {
        let captures = pattern.captures(candidate)?;
        let version: i64 = captures[1].parse().ok()?;
        Some(ExportPath::new(candidate, version))
    }
}
