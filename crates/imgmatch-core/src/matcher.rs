//! Pairing local file names with extracted paths by basename.

/// A local file and the first extracted path whose basename equals its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedPair {
    pub file_name: String,
    pub image_path: String,
}

/// Final component of a `/`-separated path; the whole string when there is no `/`.
pub fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// For each file name (in the given order), the first candidate with an equal
/// basename. Files with no such candidate are omitted.
///
/// Comparison is exact and case-sensitive. Linear search per file name.
pub fn match_files<F, C>(file_names: &[F], candidates: &[C]) -> Vec<MatchedPair>
where
    F: AsRef<str>,
    C: AsRef<str>,
{
    file_names
        .iter()
        .filter_map(|name| {
            let name = name.as_ref();
            candidates
                .iter()
                .map(|c| c.as_ref())
                .find(|path| basename(path) == name)
                .map(|path| MatchedPair {
                    file_name: name.to_string(),
                    image_path: path.to_string(),
                })
        })
        .collect()
}
