//! First-match operation scan over a controller source tree

use crate::patterns::{self, CallSitePattern};
use ack_api_extractor_common::SourceLocation;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Controller subtree holding the implementation sources
const SOURCE_SUBDIR: &str = "pkg";

/// Scans controller source files for operation call sites
pub struct SourceScanner {
    patterns: Vec<Box<dyn CallSitePattern>>,
}

impl Default for SourceScanner {
    fn default() -> Self {
        Self::new(patterns::default_patterns())
    }
}

impl SourceScanner {
    /// Create a scanner with a custom pattern list
    pub fn new(patterns: Vec<Box<dyn CallSitePattern>>) -> Self {
        Self { patterns }
    }

    /// Find the first source location in `controller_dir` that invokes
    /// `operation`
    ///
    /// Go files under `pkg/` are visited in lexicographic directory-then-file
    /// order, lines top to bottom; the first line matching any pattern wins
    /// and the scan stops there. The traversal order is pinned explicitly so
    /// results do not depend on filesystem enumeration order. Unreadable
    /// files are skipped; a traversal failure aborts the scan for this
    /// operation with `None`.
    pub fn find_operation(&self, controller_dir: &Path, operation: &str) -> Option<SourceLocation> {
        let source_dir = controller_dir.join(SOURCE_SUBDIR);
        if !source_dir.is_dir() {
            return None;
        }

        let matchers = patterns::compile(&self.patterns, operation)?;

        for entry in WalkDir::new(&source_dir).sort_by_file_name() {
            let entry = entry.ok()?;
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|ext| ext.to_str()) != Some("go")
            {
                continue;
            }

            let Ok(content) = fs::read_to_string(path) else {
                continue;
            };

            for (index, line) in content.lines().enumerate() {
                if matchers.iter().any(|matcher| matcher.is_match(line)) {
                    let relative = path.strip_prefix(controller_dir).unwrap_or(path);
                    return Some(SourceLocation {
                        file: relative.to_string_lossy().into_owned(),
                        line: (index + 1) as u32,
                    });
                }
            }
        }

        None
    }
}
