// crates/infra/src/filesystem.rs
use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use ignore::{DirEntry, WalkBuilder};
use log::debug;
use sales_summary_ports::filesystem::{DiscoveredFiles, DiscoveryPlan, FileDiscoverer};
use sales_summary_shared_kernel::{InfrastructureError, Result, SalesSummaryError, path::logical_absolute};

/// Filesystem adapter implementing the `FileDiscoverer` port with a lazy recursive walk.
///
/// Unlike a source-tree walk, nothing is pruned: hidden entries and
/// ignore files are not consulted, so every file under the root is a candidate.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobFileDiscoverer;

impl GlobFileDiscoverer {
    pub fn new() -> Self {
        Self
    }
}

impl FileDiscoverer for GlobFileDiscoverer {
    fn discover(&self, plan: &DiscoveryPlan) -> Result<DiscoveredFiles> {
        let matcher = compile_pattern(&plan.pattern)?;

        if !plan.root.is_dir() {
            debug!("input root '{}' does not exist; nothing to discover", plan.root.display());
            return Ok(Box::new(std::iter::empty::<Result<PathBuf>>()));
        }

        let root = logical_absolute(&plan.root);
        debug!("discovering '{}' under '{}'", plan.pattern, root.display());
        let walk = build_walker(&root).build();

        Ok(Box::new(walk.filter_map(move |result| match result {
            Ok(entry) if is_matching_file(&entry, &matcher) => Some(Ok(entry.into_path())),
            Ok(_) => None,
            Err(err) => {
                let walk_error = InfrastructureError::Walk { root: root.clone(), details: err.to_string() };
                Some(Err(SalesSummaryError::from(walk_error)))
            }
        })))
    }
}

fn build_walker(root: &Path) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);
    builder.follow_links(false);
    builder
}

fn is_matching_file(entry: &DirEntry, matcher: &GlobMatcher) -> bool {
    let Some(ft) = entry.file_type() else {
        return false;
    };
    // Symlinked files count when their target is a regular file.
    let is_file = ft.is_file() || (ft.is_symlink() && entry.path().is_file());
    is_file && entry.path().file_name().is_some_and(|name| matcher.is_match(name))
}

fn compile_pattern(pattern: &str) -> Result<GlobMatcher> {
    Glob::new(pattern)
        .map(|glob| glob.compile_matcher())
        .map_err(|err| {
            InfrastructureError::InvalidPattern { pattern: pattern.to_string(), details: err.to_string() }.into()
        })
}
