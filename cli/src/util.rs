use std::io::Write as _;
use std::path::{Path, PathBuf};

use colored::Colorize as _;
use termoj_core::style::ColorTheme as _;

pub fn replace_homedir_to_tilde(path: impl Into<PathBuf>) -> PathBuf {
    let path = path.into();
    let Some(home_dir) = ::dirs::home_dir() else {
        return path;
    };
    path.strip_prefix(home_dir)
        .map(|path| Path::new("~").join(path))
        .unwrap_or(path)
}

/// `warn` by default, `info` with `-v`, `debug` with `-vv`; `RUST_LOG` wins.
pub fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .format(|buf, record| {
            let level = record.level();
            writeln!(
                buf,
                "[{}] {}",
                level.as_str().color(level.color()),
                record.args()
            )
        })
        .init();
}
