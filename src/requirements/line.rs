//! Classification of single requirements-file lines
//!
//! Handles:
//! - Blank and whitespace-only lines
//! - Comments: `# pinned for the build image`
//! - Stray docstring artifacts: `"""`
//! - Includes: `-r base.txt`
//! - Specifiers: `requests[security]>=2.0; python_version>'3.6'`

use super::config::{COMMENT_PREFIX, DOCSTRING_PREFIX, INCLUDE_MARKER, SPECIFIER_DELIMITERS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementLine<'a> {
    Skip,
    /// Path named by an include directive, as written in the file.
    Include(&'a str),
    /// Bare package identifier.
    Package(&'a str),
}

pub fn classify(line: &str) -> RequirementLine<'_> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) || line.starts_with(DOCSTRING_PREFIX) {
        return RequirementLine::Skip;
    }

    if line.starts_with(INCLUDE_MARKER) {
        return match line.split_whitespace().last() {
            Some(target) if target != INCLUDE_MARKER => RequirementLine::Include(target),
            _ => RequirementLine::Skip,
        };
    }

    let name = package_identifier(line);
    if name.is_empty() {
        RequirementLine::Skip
    } else {
        RequirementLine::Package(name)
    }
}

/// Returns the text before the first specifier delimiter, trimmed.
pub fn package_identifier(specifier: &str) -> &str {
    specifier
        .split(SPECIFIER_DELIMITERS)
        .next()
        .unwrap_or_default()
        .trim()
}
