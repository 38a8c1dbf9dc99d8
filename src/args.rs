use crate::config::{Config, Mode};

pub const FILE_FLAG: &str = "-file=";
pub const DIR_FLAG: &str = "-dir=";
pub const EXT_FLAG: &str = "-ext=";
pub const SKIP_LINE_COMMENTS_FLAG: &str = "-skipLineComments";

/// Translates `config` into `qtc` arguments.
///
/// Order is fixed: target selector, extension, then `-skipLineComments`.
/// Empty fields never produce a token. In file mode `dir` and `ext` are
/// dropped but the skip flag is still honored.
pub fn build_args(config: &Config) -> Vec<String> {
    let mut args = Vec::with_capacity(3);

    match config.mode() {
        Mode::File(file) => args.push(format!("{FILE_FLAG}{file}")),
        Mode::Directory { dir, ext } => {
            if !dir.is_empty() {
                args.push(format!("{DIR_FLAG}{dir}"));
            }
            if !ext.is_empty() {
                args.push(format!("{EXT_FLAG}{ext}"));
            }
        }
    }

    if config.skip_line_comments {
        args.push(SKIP_LINE_COMMENTS_FLAG.to_string());
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dir: &str, ext: &str, file: &str, skip: bool) -> Config {
        Config {
            dir: dir.into(),
            skip_line_comments: skip,
            ext: ext.into(),
            file: file.into(),
        }
    }

    #[test]
    fn file_mode_drops_dir_and_ext() {
        assert_eq!(
            build_args(&config("templates", ".qtpl", "test.qtpl", false)),
            vec!["-file=test.qtpl"]
        );
        assert_eq!(
            build_args(&config("", "", "test.qtpl", false)),
            vec!["-file=test.qtpl"]
        );
    }

    #[test]
    fn file_mode_keeps_skip_flag() {
        assert_eq!(
            build_args(&config("", "", "test.qtpl", true)),
            vec!["-file=test.qtpl", "-skipLineComments"]
        );
        assert_eq!(
            build_args(&config("templates", ".qtpl", "test.qtpl", true)),
            vec!["-file=test.qtpl", "-skipLineComments"]
        );
    }

    #[test]
    fn directory_mode_orders_tokens() {
        assert_eq!(
            build_args(&config("templates", ".qtpl", "", false)),
            vec!["-dir=templates", "-ext=.qtpl"]
        );
        assert_eq!(
            build_args(&config("templates", ".qtpl", "", true)),
            vec!["-dir=templates", "-ext=.qtpl", "-skipLineComments"]
        );
    }

    #[test]
    fn omits_empty_fields() {
        assert_eq!(build_args(&config("src", "", "", false)), vec!["-dir=src"]);
        assert_eq!(
            build_args(&config("", ".template", "", false)),
            vec!["-ext=.template"]
        );
        assert_eq!(
            build_args(&config("", "", "", true)),
            vec!["-skipLineComments"]
        );
        assert!(build_args(&config("", "", "", false)).is_empty());
        assert!(!build_args(&config(".", "", "", false))
            .iter()
            .any(|arg| arg.starts_with(EXT_FLAG)));
    }

    #[test]
    fn is_repeatable() {
        let config = Config::default();
        assert_eq!(build_args(&config), build_args(&config));
        assert_eq!(build_args(&config), vec!["-dir=.", "-skipLineComments"]);
    }
}
