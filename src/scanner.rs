use crate::error::Error;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively collects regular files under `dir` whose name ends with `ext`.
///
/// Matching is a case-sensitive suffix test on the file name. The result is
/// sorted so the same tree always yields the same order.
pub fn find_template_files(dir: impl AsRef<Path>, ext: &str) -> Result<Vec<PathBuf>, Error> {
    let dir = dir.as_ref();
    let mut files = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|source| Error::Discovery {
            dir: dir.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() && has_suffix(entry.path(), ext) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

fn has_suffix(path: &Path, ext: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.as_encoded_bytes().ends_with(ext.as_bytes()))
}
