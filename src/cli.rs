//! CLI interface for Lumos.
//!
//! With no subcommand, Lumos opens the terminal app. The other subcommands
//! print JSON and exit, for inspecting or authoring sample content:
//!
//! - `lumos state`: the freshly seeded app state.
//! - `lumos seed`: the built-in seed, a template for `--seed`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::Config;
use crate::logging;
use crate::model::NavigationTab;
use crate::seed::Seed;
use crate::state::AppState;
use crate::tui;

/// Lumos: one question a day, and a persona that answers for you.
#[derive(Debug, Parser)]
#[command(name = "lumos", after_long_help = USAGE_HELP)]
pub struct Cli {
    /// Config file. Defaults to `~/.lumos/config.toml`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed file (JSON) replacing the built-in sample content.
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    /// Tab to open on, overriding `start-tab` from the config.
    #[arg(long, value_enum)]
    tab: Option<NavigationTab>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

const USAGE_HELP: &str = r#"Keys in the app:
  1-4 / Tab      switch tabs (今日 发现 分身 消息)
  ↑↓ / j k       move selection
  ⏎              open the selected item
  Esc            close the overlay on top
  q              quit

Authoring a seed:
  lumos seed > my-seed.json
  lumos --seed my-seed.json"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the terminal app (the default).
    Run,

    /// Print the seeded app state as JSON.
    State,

    /// Print the built-in seed as JSON.
    Seed,
}

/// Run the CLI, returning an error message on failure.
pub fn run(cli: Cli) -> Result<(), String> {
    let config = Config::load(cli.config.as_deref()).map_err(|e| e.to_string())?;

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            init_file_logging(&config);
            let mut state = AppState::new(load_seed(&config, cli.seed)?);
            state.select_tab(cli.tab.unwrap_or(config.start_tab));
            info!(tick_millis = config.tick_millis, "starting");
            tui::run(&mut state, config.tick()).map_err(|e| e.to_string())
        }
        Command::State => {
            logging::init_stderr();
            let mut state = AppState::new(load_seed(&config, cli.seed)?);
            state.select_tab(cli.tab.unwrap_or(config.start_tab));
            print_json(&state.snapshot())
        }
        Command::Seed => {
            logging::init_stderr();
            print_json(&Seed::builtin())
        }
    }
}

/// The explicit seed, else the configured one, else the built-in.
fn load_seed(config: &Config, explicit: Option<PathBuf>) -> Result<Seed, String> {
    match explicit.or_else(|| config.seed.clone()) {
        Some(path) => {
            info!(path = %path.display(), "loading seed");
            Seed::load(&path).map_err(|e| e.to_string())
        }
        None => Ok(Seed::builtin()),
    }
}

/// Logging must not fail the app; without a log file it runs unlogged.
fn init_file_logging(config: &Config) {
    let Some(path) = config.log_path() else {
        return;
    };
    if let Err(e) = logging::init_file(&path) {
        eprintln!("warning: logging disabled, cannot open {}: {e}", path.display());
    }
}

fn print_json(value: &impl serde::Serialize) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| format!("JSON error: {e}"))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_run() {
        let cli = Cli::try_parse_from(["lumos"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["lumos", "state", "--seed", "s.json"]).unwrap();
        assert!(matches!(cli.command, Some(Command::State)));
        assert_eq!(cli.seed, Some(PathBuf::from("s.json")));
    }

    #[test]
    fn parses_start_tab() {
        let cli = Cli::try_parse_from(["lumos", "--tab", "discover"]).unwrap();
        assert_eq!(cli.tab, Some(NavigationTab::Discover));
    }
}
