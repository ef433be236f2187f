/*!
 * File name filtering: the extension filter and ignore patterns
 */

use glob_match::glob_match;

/// Decides which files have their contents emitted
#[derive(Debug, Clone, Default)]
pub struct ExtensionFilter {
    /// Lower-cased suffixes including the leading dot
    suffixes: Vec<String>,
}

impl ExtensionFilter {
    /// Build a filter from extensions given without leading dots
    pub fn new<S: AsRef<str>>(extensions: &[S]) -> Self {
        Self {
            suffixes: extensions
                .iter()
                .map(|ext| format!(".{}", ext.as_ref().to_lowercase()))
                .collect(),
        }
    }

    /// True for any spelling of "makefile", or a name ending in a configured extension
    pub fn matches(&self, file_name: &str) -> bool {
        let name = file_name.to_lowercase();
        if name == "makefile" {
            return true;
        }
        self.suffixes.iter().any(|suffix| name.ends_with(suffix))
    }
}

/// Base-name glob patterns pruned from the traversal
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    patterns: Vec<String>,
}

impl IgnoreSet {
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.patterns.iter().any(|pattern| glob_match(pattern, name))
    }
}
