//! # nordtray
//!
//! Terminal status indicator and scriptable front end for the `nordvpn`
//! command-line client.
//!
//! ## Modules
//! - [`app`]: Indicator state and key handling.
//! - [`cli`]: Command-line argument parsing and one-shot commands.
//! - [`event`]: Event loop handling.
//! - [`theme`]: Colors.
//! - [`ui`]: TUI rendering.

mod app;
mod cli;
mod event;
mod theme;
mod ui;

use app::App;
use clap::Parser;
use cli::args::Args;
use cli::commands::ConfigInfo;
use color_eyre::Result;
use event::{Event, EventHandler};
use nordtray::config::{resolve_config_dir, AppConfig};
use nordtray::NordVpn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse arguments
    let args = Args::parse();

    let (config_dir, source) = resolve_config_dir(args.config_dir.as_deref());
    let config = AppConfig::load(&config_dir)?;

    // One-shot commands print and exit
    if let Some(command) = &args.command {
        init_logging(args.verbose);
        tracing::debug!(dir = %config_dir.display(), %source, "configuration resolved");

        let vpn = NordVpn::from_config(&config);
        let info = ConfigInfo {
            dir: &config_dir,
            source,
            config: &config,
        };
        if !cli::commands::handle_command(command, &vpn, args.json, &info)? {
            std::process::exit(1);
        }
        return Ok(());
    }

    // Query the client before taking over the terminal so launch errors stay readable
    let app = App::new(NordVpn::from_config(&config), &config)?;

    // Run the TUI application
    let terminal = ratatui::init();
    let result = run_tui(terminal, app, &config);
    ratatui::restore();

    result
}

/// Installs the stderr subscriber; `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init()
        .ok();
}

/// Runs the main TUI event loop.
fn run_tui(mut terminal: ratatui::DefaultTerminal, mut app: App, config: &AppConfig) -> Result<()> {
    let events = EventHandler::new(config.tick_rate(), config.status_poll_interval());

    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, &mut app))?;

        match events.next()? {
            Event::Key(key_event) => app.handle_key(key_event),
            Event::Tick => app.on_tick(),
            Event::Poll => app.on_poll(),
            // Redrawn on the next loop iteration
            Event::Resize => {}
        }
    }

    Ok(())
}
