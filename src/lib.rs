mod args;
pub mod config;
pub mod diagnostics;
mod error;
mod qtc;
mod scanner;
mod validate;

pub use args::build_args;
pub use config::{Config, Mode, DEFAULT_EXTENSION};
pub use diagnostics::{handle_error, is_temporary_file_warning, Report};
pub use error::{Error, ValidationError};
pub use qtc::Qtc;
pub use scanner::find_template_files;
pub use validate::validate;

pub fn compile(config: &Config) -> Result<(), Error> {
    Qtc::new().compile(config)
}

pub fn compile_with_validation(config: &Config) -> Result<(), Error> {
    Qtc::new().compile_with_validation(config)
}

/// Compiles the current directory with the default settings.
pub fn compile_default() -> Result<(), Error> {
    compile(&Config::default())
}

pub fn compile_directory(dir: impl Into<String>) -> Result<(), Error> {
    compile(&Config::for_directory(dir))
}

pub fn compile_file(file: impl Into<String>) -> Result<(), Error> {
    compile(&Config::for_file(file))
}

pub fn compile_with_extension(dir: impl Into<String>, ext: impl Into<String>) -> Result<(), Error> {
    compile(&Config::for_directory_with_extension(dir, ext))
}
