//! Classification of `qtc` stderr after a non-zero exit.
//!
//! `qtc` sometimes fails because a temporary file under `.tmp` vanished
//! between listing and reading. That exit carries no useful diagnostic, so it
//! is reported as a suppressed warning instead of a compilation failure.

use crate::error::Error;
use std::fmt;
use tracing::{debug, warn};

const TEMP_MARKER: &[u8] = b".tmp";
const MISSING_MARKER: &[u8] = b"no such file or directory";
pub const SUPPRESSED_PREFIX: &str = "[qtc warning suppressed]";

/// Returns true when stderr mentions both `.tmp` and a missing file.
pub fn is_temporary_file_warning(stderr: &[u8]) -> bool {
    contains(stderr, TEMP_MARKER) && contains(stderr, MISSING_MARKER)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    SuppressedWarning { message: String },
    Failed { detail: String },
}

impl Report {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn into_result(self) -> Result<(), Error> {
        match self {
            Self::SuppressedWarning { .. } => Ok(()),
            Self::Failed { detail } => Err(Error::CompilationFailed { detail }),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SuppressedWarning { message } => write!(f, "{SUPPRESSED_PREFIX} {message}"),
            Self::Failed { detail } => f.write_str(detail),
        }
    }
}

/// Decides how a failed invocation is reported.
///
/// `cause` is whatever the invoker knows about the failure (usually the exit
/// status) and is only shown when stderr is empty. Failures are left to the
/// caller to report; only suppressed warnings are logged above debug.
pub fn handle_error(stderr: &[u8], cause: &dyn fmt::Display) -> Report {
    let text = String::from_utf8_lossy(stderr);

    if is_temporary_file_warning(stderr) {
        let message = text.trim().to_string();
        warn!(%message, "{SUPPRESSED_PREFIX} temporary file vanished during compilation");
        return Report::SuppressedWarning { message };
    }

    let detail = if text.trim().is_empty() {
        format!("qtc execution failed: {cause}")
    } else {
        text.into_owned()
    };
    debug!(%cause, %detail, "qtc failed");
    Report::Failed { detail }
}
