use crate::config::Config;
use crate::error::ValidationError;
use std::fs;

/// Checks that `config` names something `qtc` can actually compile.
///
/// Only `stat` calls are made (symlinks are followed), so the same config can
/// be validated from any number of threads at once.
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    if config.file.is_empty() && config.dir.is_empty() {
        return Err(ValidationError::MissingTarget);
    }

    if !config.ext.is_empty() && !config.ext.starts_with('.') {
        return Err(ValidationError::InvalidExtension {
            ext: config.ext.clone(),
        });
    }

    if !config.file.is_empty() {
        return validate_file(&config.file);
    }

    validate_dir(&config.dir)
}

fn validate_file(path: &str) -> Result<(), ValidationError> {
    let metadata = fs::metadata(path).map_err(|err| ValidationError::FileNotAccessible {
        path: path.to_string(),
        reason: err.to_string(),
    })?;

    if metadata.is_dir() {
        return Err(ValidationError::FileNotAccessible {
            path: path.to_string(),
            reason: "is a directory".into(),
        });
    }
    if !metadata.is_file() {
        return Err(ValidationError::FileNotAccessible {
            path: path.to_string(),
            reason: "not a regular file".into(),
        });
    }
    Ok(())
}

fn validate_dir(path: &str) -> Result<(), ValidationError> {
    let metadata = fs::metadata(path).map_err(|source| ValidationError::DirectoryNotAccessible {
        path: path.to_string(),
        source,
    })?;

    if !metadata.is_dir() {
        return Err(ValidationError::NotADirectory {
            path: path.to_string(),
        });
    }
    Ok(())
}
