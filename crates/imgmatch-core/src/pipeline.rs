//! One match run: read source, extract, list directory, pair.

use crate::config::MatchConfig;
use crate::error::MatchError;
use crate::extract::{read_source, PathExtractor};
use crate::listing::list_local_files;
use crate::matcher::{match_files, MatchedPair};
use std::path::Path;

/// Pairs regular files in `dir` with image paths quoted in `source_document`.
///
/// Both inputs are obtained before any matching; if either is unavailable the
/// run fails and no pairs are returned.
pub fn run(
    source_document: &Path,
    dir: &Path,
    cfg: &MatchConfig,
) -> Result<Vec<MatchedPair>, MatchError> {
    let text = read_source(source_document)?;
    let candidates = PathExtractor::new(&cfg.path_prefix).extract(&text);
    drop(text);
    tracing::debug!(
        "extracted {} candidate paths from {}",
        candidates.len(),
        source_document.display()
    );

    let files = list_local_files(dir)?;
    let pairs = match_files(&files, &candidates);
    tracing::info!(
        "matched {} of {} files in {} against {}",
        pairs.len(),
        files.len(),
        dir.display(),
        source_document.display()
    );
    Ok(pairs)
}
