use crate::args::build_args;
use crate::config::Config;
use crate::diagnostics::handle_error;
use crate::error::Error;
use crate::validate::validate;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, info};

pub const DEFAULT_PROGRAM: &str = "qtc";
pub const VERSION_FLAG: &str = "-version";

/// Handle to the external `qtc` executable.
///
/// Nothing is checked at construction; availability is probed on demand so
/// callers that only build arguments never need the binary installed.
#[derive(Debug, Clone)]
pub struct Qtc {
    program: OsString,
}

impl Default for Qtc {
    fn default() -> Self {
        Self::new()
    }
}

impl Qtc {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    /// Resolves the program on `PATH` (or checks it directly when it is a path).
    pub fn ensure_available(&self) -> Result<PathBuf, Error> {
        which::which(&self.program).map_err(|err| Error::ToolUnavailable {
            program: self.program_name(),
            reason: err.to_string(),
        })
    }

    pub fn is_available(&self) -> bool {
        self.ensure_available().is_ok()
    }

    /// Asks `qtc` for its version and returns stdout trimmed.
    pub fn version(&self) -> Result<String, Error> {
        let output = Command::new(&self.program)
            .arg(VERSION_FLAG)
            .output()
            .map_err(|err| Error::ToolUnavailable {
                program: self.program_name(),
                reason: err.to_string(),
            })?;

        if !output.status.success() {
            handle_error(&output.stderr, &output.status).into_result()?;
            return self.empty_version();
        }

        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if version.is_empty() {
            return self.empty_version();
        }
        Ok(version)
    }

    fn empty_version(&self) -> Result<String, Error> {
        Err(Error::ToolUnavailable {
            program: self.program_name(),
            reason: format!("{VERSION_FLAG} printed no version"),
        })
    }

    /// Runs `qtc` with `args` and blocks until it exits.
    ///
    /// A non-zero exit is classified; a benign temporary-file warning
    /// counts as success.
    pub fn run(&self, args: &[String]) -> Result<(), Error> {
        debug!(program = %self.program_name(), ?args, "running qtc");
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|err| Error::ToolUnavailable {
                program: self.program_name(),
                reason: err.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            debug!(stdout = %stdout.trim_end(), "qtc output");
        }

        if output.status.success() {
            info!(?args, "qtc finished");
            return Ok(());
        }
        handle_error(&output.stderr, &output.status).into_result()
    }

    pub fn compile(&self, config: &Config) -> Result<(), Error> {
        self.ensure_available()?;
        self.run(&build_args(config))
    }

    /// Validates `config` before compiling. Validation failures come back as
    /// [`Error::Validation`], everything else as tool or compilation errors.
    pub fn compile_with_validation(&self, config: &Config) -> Result<(), Error> {
        validate(config)?;
        self.compile(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING: &str = "qtc-wrap-definitely-missing-binary";

    #[test]
    fn missing_program_is_unavailable() {
        let qtc = Qtc::with_program(MISSING);
        assert!(!qtc.is_available());
        let err = qtc.ensure_available().unwrap_err();
        assert!(matches!(err, Error::ToolUnavailable { .. }));
        assert!(err.to_string().contains("qtc tool validation failed"));
    }

    #[test]
    fn version_of_missing_program_fails() {
        let err = Qtc::with_program(MISSING).version().unwrap_err();
        assert!(matches!(err, Error::ToolUnavailable { .. }));
    }

    #[test]
    fn compile_reports_missing_tool_before_running() {
        let err = Qtc::with_program(MISSING)
            .compile(&Config::default())
            .unwrap_err();
        assert!(!err.is_validation());
        assert!(matches!(err, Error::ToolUnavailable { .. }));
    }

    #[test]
    fn validation_failure_is_reported_distinctly() {
        let config = Config {
            dir: "/nonexistent/directory".into(),
            skip_line_comments: false,
            ext: String::new(),
            file: String::new(),
        };
        let err = Qtc::with_program(MISSING)
            .compile_with_validation(&config)
            .unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("configuration validation failed"));

        let empty = Config {
            dir: String::new(),
            ..config
        };
        let err = Qtc::with_program(MISSING)
            .compile_with_validation(&empty)
            .unwrap_err();
        assert!(err
            .to_string()
            .contains("either File or Dir must be specified"));
    }
}
