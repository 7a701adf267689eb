use std::io::{self, BufRead, Cursor};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::logging;
use connect_four::ui::{console, App};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play two-player Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Read moves from stdin (one column number per line) instead of the TUI
    #[arg(long)]
    headless: bool,

    /// Play these 1-based columns headlessly, e.g. --moves 4,4,5
    #[arg(long, value_delimiter = ',')]
    moves: Option<Vec<usize>>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let loaded = AppConfig::load_optional(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    let config_found = loaded.is_some();
    let config = loaded.unwrap_or_default();

    let headless = cli.headless || cli.moves.is_some();
    logging::init(&config.logging, headless).context("initializing logging")?;
    if !config_found {
        tracing::warn!(path = %cli.config.display(), "config file not found, using defaults");
    }

    if let Some(moves) = cli.moves {
        let script = moves
            .iter()
            .map(|col| col.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        return play_console(Cursor::new(script), &config);
    }

    if headless {
        return play_console(io::stdin().lock(), &config);
    }

    run_tui(&config).context("running terminal UI")
}

fn play_console<R: BufRead>(input: R, config: &AppConfig) -> Result<()> {
    let mut stdout = io::stdout().lock();
    console::run(input, &mut stdout, &config.ui).context("playing console game")?;
    Ok(())
}

fn run_tui(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.ui.clone());
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
