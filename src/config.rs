/// Extension `qtc` falls back to when none is given in directory mode.
pub const DEFAULT_EXTENSION: &str = ".qtpl";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dir: String,
    pub skip_line_comments: bool,
    pub ext: String,
    pub file: String,
}

/// The invocation shape a config resolves to. `file` wins over `dir`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode<'a> {
    File(&'a str),
    Directory { dir: &'a str, ext: &'a str },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dir: ".".into(),
            skip_line_comments: true,
            ext: String::new(),
            file: String::new(),
        }
    }
}

impl Config {
    pub fn for_directory(dir: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    pub fn for_directory_with_extension(dir: impl Into<String>, ext: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            ext: ext.into(),
            ..Self::default()
        }
    }

    pub fn for_file(file: impl Into<String>) -> Self {
        Self {
            dir: String::new(),
            file: file.into(),
            ..Self::default()
        }
    }

    pub fn mode(&self) -> Mode<'_> {
        if self.file.is_empty() {
            Mode::Directory {
                dir: &self.dir,
                ext: &self.ext,
            }
        } else {
            Mode::File(&self.file)
        }
    }

    /// Extension used when scanning `dir` locally, mirroring what `qtc` does.
    pub fn effective_ext(&self) -> &str {
        if self.ext.is_empty() {
            DEFAULT_EXTENSION
        } else {
            &self.ext
        }
    }
}
