use crate::error::Error;
use std::path::PathBuf;
use tracing::debug;

/// Expand trace arguments into file paths, keeping argument order and
/// dropping duplicates.
pub fn expand_traces<T: AsRef<str>>(patterns: &[T]) -> Result<Vec<PathBuf>, Error> {
    let mut paths = Vec::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let entries = glob::glob(pattern).map_err(|source| Error::Pattern {
            pattern: pattern.to_owned(),
            source,
        })?;

        let mut matched = 0usize;
        for entry in entries {
            let path = entry?;
            if !path.is_file() {
                continue;
            }
            matched += 1;
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
        if matched == 0 {
            return Err(Error::NoMatch(pattern.to_owned()));
        }
        debug!(pattern, matched, "expanded trace argument");
    }
    Ok(paths)
}
