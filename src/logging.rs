use std::io::Write;

use env_logger::{Builder, Target, fmt::Formatter};
use log::{Level, LevelFilter};

use crate::error::{Result, TripError};

/// Map `-v` / `-q` flags to a level. Warnings show by default.
pub fn level_filter(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. `RUST_LOG` overrides the flag-derived level.
pub fn init_logger(verbose: u8, quiet: bool) -> Result<()> {
    let mut builder = Builder::new();
    builder
        .filter_level(level_filter(verbose, quiet))
        .parse_default_env()
        .target(Target::Stderr)
        .format(|buf: &mut Formatter, record| {
            writeln!(buf, "{} {}", level_tag(record.level()), record.args())
        });

    builder
        .try_init()
        .map_err(|e| TripError::Logger(e.to_string()))
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter(0, false), LevelFilter::Warn);
        assert_eq!(level_filter(1, false), LevelFilter::Info);
        assert_eq!(level_filter(2, false), LevelFilter::Debug);
        assert_eq!(level_filter(7, false), LevelFilter::Trace);
        assert_eq!(level_filter(3, true), LevelFilter::Error);
    }
}
