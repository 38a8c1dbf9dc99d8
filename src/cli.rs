use clap::Parser;
use std::path::PathBuf;
use qtc_wrap::Config;

#[derive(Parser, Debug)]
#[command(
    name = "qtc-wrap",
    version,
    about = "Validates options and runs the qtc template compiler, hiding its benign temporary-file warnings."
)]
pub struct Cli {
    #[arg(
        short,
        long,
        default_value = ".",
        value_name = "DIR",
        help = "Directory compiled in batch mode"
    )]
    pub dir: String,

    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Single template to compile; overrides --dir and --ext"
    )]
    pub file: Option<String>,

    #[arg(
        short = 'e',
        long = "ext",
        alias = "extension",
        value_name = "EXT",
        help = "Template extension, starting with a dot (qtc defaults to .qtpl)"
    )]
    pub ext: Option<String>,

    #[arg(
        long = "keep-line-comments",
        help = "Do not pass -skipLineComments to qtc",
        action = clap::ArgAction::SetTrue
    )]
    pub keep_line_comments: bool,

    #[arg(
        long,
        default_value = "qtc",
        value_name = "PATH",
        help = "qtc executable to run"
    )]
    pub qtc: PathBuf,

    #[arg(long = "no-validate", help = "Skip checking the options before running qtc")]
    pub no_validate: bool,

    #[arg(
        long,
        conflicts_with_all = ["tool_version", "file"],
        help = "List the templates under --dir instead of compiling"
    )]
    pub list: bool,

    #[arg(long = "tool-version", help = "Print the qtc version and exit")]
    pub tool_version: bool,

    #[arg(short, long, help = "Only log warnings and errors")]
    pub quiet: bool,
}

impl Cli {
    pub fn to_config(&self) -> Config {
        Config {
            dir: self.dir.clone(),
            skip_line_comments: !self.keep_line_comments,
            ext: self.ext.clone().unwrap_or_default(),
            file: self.file.clone().unwrap_or_default(),
        }
    }
}
