use std::path::PathBuf;
use std::str::FromStr;

use argh::FromArgs;
use log::LevelFilter;

/// Parse DXL scripts and inspect their syntax trees.
#[derive(FromArgs, Debug)]
pub struct Args {
    #[argh(subcommand)]
    pub command: Command,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
pub enum Command {
    Dump(Dump),
    Check(Check),
}

/// Print the syntax tree of a source file.
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "dump")]
pub struct Dump {
    /// the source file to dump
    #[argh(positional)]
    pub path: PathBuf,

    /// print the typed outline instead of the concrete tree
    #[argh(switch)]
    pub ast: bool,

    /// also print the semantic tokens and function outline
    #[argh(switch)]
    pub symbols: bool,

    /// the amount of logging to perform
    #[argh(option, default = "LogLevel::default()")]
    pub log: LogLevel,
}

/// Check a source file for syntax errors.
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "check")]
pub struct Check {
    /// the source file to check
    #[argh(positional)]
    pub path: PathBuf,

    /// the amount of logging to perform
    #[argh(option, default = "LogLevel::default()")]
    pub log: LogLevel,
}

/// How much to log, as given on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LogLevel(pub LevelFilter);

impl Default for LogLevel {
    fn default() -> Self {
        Self(LevelFilter::Off)
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let filter = match s {
            "off" => LevelFilter::Off,
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warning" | "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,

            _ => {
                return Err(format!(
                    "unknown log level `{s}`, expected one of `off`, `trace`, `debug`, `info`, `warning` or `error`"
                ))
            }
        };

        Ok(Self(filter))
    }
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;

    use super::LogLevel;

    #[test]
    fn log_levels() {
        assert_eq!(Ok(LogLevel(LevelFilter::Warn)), "warning".parse());
        assert_eq!(Ok(LogLevel(LevelFilter::Warn)), "warn".parse());
        assert_eq!(Ok(LogLevel(LevelFilter::Off)), "off".parse());
        assert!("loud".parse::<LogLevel>().is_err());
    }
}
