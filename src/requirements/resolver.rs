use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use super::line::{classify, RequirementLine};

/// Unique package identifiers declared by a requirements file and its includes.
pub type RequirementSet = BTreeSet<String>;

/// Resolves the package identifiers declared by the requirements file at `path`,
/// following `-r` includes relative to the including file.
///
/// A missing or unreadable file contributes nothing. Each file is read at most
/// once per call, so cyclic includes terminate.
pub fn resolve(path: &Path) -> RequirementSet {
    let mut resolver = Resolver::default();
    resolver.visit(path);
    resolver.requirements
}

#[derive(Default)]
struct Resolver {
    visited: HashSet<PathBuf>,
    requirements: RequirementSet,
}

impl Resolver {
    fn visit(&mut self, path: &Path) {
        let canonical = match fs::canonicalize(path) {
            Ok(canonical) => canonical,
            Err(_) => {
                debug!("Requirements file not found: {}", path.display());
                return;
            }
        };

        if !self.visited.insert(canonical.clone()) {
            debug!(
                "Skipping requirements file already visited: {}",
                canonical.display()
            );
            return;
        }

        let content = match fs::read_to_string(&canonical) {
            Ok(content) => content,
            Err(e) => {
                warn!(
                    "Failed to read requirements file {}: {e}",
                    canonical.display()
                );
                return;
            }
        };

        // Includes are relative to the path as given, not its symlink target.
        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        for line in content.lines() {
            match classify(line) {
                RequirementLine::Skip => {}
                RequirementLine::Include(target) => {
                    let included = dir.join(target);
                    trace!("Following include {}", included.display());
                    self.visit(&included);
                }
                RequirementLine::Package(name) => {
                    self.requirements.insert(name.to_string());
                }
            }
        }
    }
}
