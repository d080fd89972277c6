//! Source document reading and candidate path extraction.
//!
//! A candidate path is the content of a double-quoted string that starts with
//! the configured prefix (`/images/` by default). The match ends at the next
//! `"` and never contains a line break (`\n` or a bare `\r`), as with text read
//! in universal-newline mode.

use crate::error::MatchError;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Compiled extractor for one path prefix.
#[derive(Debug, Clone)]
pub struct PathExtractor {
    re: Regex,
}

impl PathExtractor {
    /// Builds an extractor for quoted strings beginning with `prefix`.
    /// The prefix is matched literally (regex metacharacters are escaped).
    pub fn new(prefix: &str) -> Self {
        let pattern = format!(r#""({}[^"\r\n]*)""#, regex::escape(prefix));
        // An escaped literal wrapped in a fixed pattern always compiles.
        let re = Regex::new(&pattern).expect("escaped prefix yields a valid pattern");
        Self { re }
    }

    /// All candidate paths in order of appearance; duplicates kept.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.re
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Extracts candidate paths using the given prefix.
pub fn extract_candidate_paths(text: &str, prefix: &str) -> Vec<String> {
    PathExtractor::new(prefix).extract(text)
}

/// Reads the whole source document as UTF-8 text.
///
/// The file is closed before this returns, on success and on failure.
/// A missing file, a read error, or invalid UTF-8 is `SourceUnavailable`.
pub fn read_source(path: &Path) -> Result<String, MatchError> {
    fs::read_to_string(path).map_err(|e| MatchError::source_unavailable(path, e))
}
