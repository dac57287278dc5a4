mod app;
mod cli;
mod command;
mod config;
mod consts;
mod game;
mod highscore;
mod input;
mod logging;
mod ticker;
mod util;
use crate::app::App;
use crate::cli::{Arguments, Cli};
use crate::config::Config;
use crate::highscore::HighScoreStore;
use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    execute,
};
use log::{debug, error, info, warn};
use ratatui::DefaultTerminal;
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Cli::from_env() {
        Ok(Cli::Run(args)) => args,
        Ok(Cli::Help) => {
            print!("{}", Cli::usage());
            return ExitCode::SUCCESS;
        }
        Ok(Cli::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{}: {e}", env!("CARGO_PKG_NAME"));
            eprintln!("Try '{} --help' for more information.", env!("CARGO_PKG_NAME"));
            return ExitCode::from(2);
        }
    };
    let config = match setup(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {e:#}", env!("CARGO_PKG_NAME"));
            return ExitCode::from(2);
        }
    };
    let store = config.high_score_store();
    debug!("High score store: {store:?}");
    let terminal = ratatui::init();
    let r = play(terminal, store);
    ratatui::restore();
    info!("Exiting");
    io_exit(r)
}

/// Load the configuration and start logging
fn setup(args: &Arguments) -> anyhow::Result<Config> {
    let config = args.load_config()?;
    logging::init(&config.log, args.log_file.as_deref())?;
    info!(
        "Starting {} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    match args.config {
        Some(ref path) => info!("Read configuration from {}", path.display()),
        None => info!("Using default configuration location"),
    }
    debug!("Configuration: {config:?}");
    Ok(config)
}

fn play(terminal: DefaultTerminal, store: Box<dyn HighScoreStore>) -> io::Result<()> {
    execute!(io::stdout(), EnableFocusChange)?;
    let r = App::new(rand::rng(), store).run(terminal);
    if let Err(e) = execute!(io::stdout(), DisableFocusChange) {
        warn!("Failed to disable focus change events: {e}");
    }
    r
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
