use crate::config::{Config, ConfigError};
use lexopt::{Arg, Parser};
use std::path::PathBuf;

/// What the command line asked the program to do
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Cli {
    Run(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    /// Configuration file given with `--config`
    pub(crate) config: Option<PathBuf>,

    /// Log file given with `--log-file`
    pub(crate) log_file: Option<PathBuf>,
}

impl Cli {
    pub(crate) fn from_env() -> Result<Cli, lexopt::Error> {
        Cli::from_parser(Parser::from_env())
    }

    fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run(args))
    }

    pub(crate) fn usage() -> String {
        format!(
            concat!(
                "Usage: {name} [<options>]\n",
                "\n",
                "Play Snake on a {size}x{size} board in the terminal.\n",
                "\n",
                "Options:\n",
                "  -c, --config <PATH>    Read configuration from the given file\n",
                "      --log-file <PATH>  Write log messages to the given file\n",
                "  -h, --help             Show this help message and exit\n",
                "  -V, --version          Show the program version and exit\n",
            ),
            name = env!("CARGO_PKG_NAME"),
            size = crate::consts::GRID_SIZE,
        )
    }
}

impl Arguments {
    /// Load the configuration file given on the command line or, if none was
    /// given, the default configuration file (if it exists)
    pub(crate) fn load_config(&self) -> Result<Config, ConfigError> {
        match self.config {
            Some(ref path) => Config::load(path, false),
            None => Config::load(&Config::default_path()?, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn parse(args: &'static [&'static str]) -> Result<Cli, lexopt::Error> {
        Cli::from_parser(Parser::from_iter(args.iter().copied()))
    }

    #[test]
    fn no_args() {
        assert_eq!(
            parse(&["gridsnake"]).unwrap(),
            Cli::Run(Arguments::default())
        );
    }

    #[test]
    fn all_options() {
        let cli = parse(&[
            "gridsnake",
            "--config",
            "snake.toml",
            "--log-file=/tmp/snake.log",
        ])
        .unwrap();
        assert_eq!(
            cli,
            Cli::Run(Arguments {
                config: Some(PathBuf::from("snake.toml")),
                log_file: Some(PathBuf::from("/tmp/snake.log")),
            })
        );
    }

    #[test]
    fn short_config() {
        let cli = parse(&["gridsnake", "-c", "other.toml"]).unwrap();
        assert_eq!(
            cli,
            Cli::Run(Arguments {
                config: Some(PathBuf::from("other.toml")),
                log_file: None,
            })
        );
    }

    #[test]
    fn help_and_version() {
        assert_eq!(parse(&["gridsnake", "-h"]).unwrap(), Cli::Help);
        assert_eq!(
            parse(&["gridsnake", "--version"]).unwrap(),
            Cli::Version
        );
    }

    #[test]
    fn bad_args() {
        assert!(parse(&["gridsnake", "--speed", "fast"]).is_err());
        assert!(parse(&["gridsnake", "extra"]).is_err());
        assert!(parse(&["gridsnake", "--config"]).is_err());
    }

    #[test]
    fn explicit_config_must_exist() {
        let tmp = tempdir().unwrap();
        let args = Arguments {
            config: Some(tmp.path().join("missing.toml")),
            log_file: None,
        };
        assert!(matches!(args.load_config(), Err(ConfigError::Read(_))));
    }

    #[test]
    fn usage_mentions_options() {
        let usage = Cli::usage();
        assert!(usage.contains("--config"));
        assert!(usage.contains("20x20"));
    }
}
