use std::fs;
use std::path::Path;

use crate::core::Result;

/// Literal-substring ignore rules loaded from the rules file.
///
/// Matching is intentionally coarse: a path is ignored when its final
/// segment starts with `.`, or when its full string contains any loaded
/// pattern as a substring. No glob or regex semantics.
pub struct IgnoreList {
    patterns: Vec<String>,
}

impl IgnoreList {
    /// Load rules from a file; a missing file yields an empty rule set
    pub fn load(path: &Path) -> Result<Self> {
        let mut patterns = Vec::new();
        if path.exists() {
            for line in fs::read_to_string(path)?.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                patterns.push(line.to_string());
            }
        }
        Ok(Self { patterns })
    }

    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Whether a repository-relative path is excluded from staging/status
    pub fn is_ignored(&self, path: &str) -> bool {
        let file_name = path.rsplit('/').next().unwrap_or(path);
        if file_name.starts_with('.') {
            return true;
        }
        self.patterns.iter().any(|pattern| path.contains(pattern))
    }
}
