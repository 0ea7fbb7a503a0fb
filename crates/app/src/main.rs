// Composition root: wires the SMTP adapter into the application service
// and runs the synchronous TUI event loop.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tracing::{error, info};

use secretsanta::adapters::SmtpNotifier;
use secretsanta::cli::CliArgs;
use secretsanta::config::Config;
use secretsanta::services::AppService;
use secretsanta::tui::{TuiMessage, TuiModel, TuiUpdate, TuiView};
use secretsanta_core::app::Command;

fn main() -> Result<()> {
    // Initialize tracing with env filter
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting Secret Santa");

    let cli_args = CliArgs::parse();
    let config = Config::from_cli_and_file(cli_args)?;
    info!(
        "Loaded config, mail relay {}:{}",
        config.smtp.relay, config.smtp.port
    );

    // Create adapters and the application service (dependency injection)
    let notifier = Arc::new(SmtpNotifier::new(&config.smtp));
    let mut service = AppService::new(notifier);
    let mut model = TuiModel::new(config.ui.clone());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal, &mut service, &mut model);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("Application error: {}", err);
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    info!("Secret Santa shut down cleanly");
    Ok(())
}

/// Main application loop. One user action runs to completion before the
/// next keypress is read - there is nothing concurrent here.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    service: &mut AppService,
    model: &mut TuiModel,
) -> Result<()> {
    loop {
        terminal.draw(|frame| TuiView::render(model, frame))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let message = TuiUpdate::handle_key(model, key.code, key.modifiers)?;
            if let TuiMessage::Command(cmd) = message {
                if matches!(cmd, Command::Quit) {
                    info!("Quit requested by user");
                    model.should_quit = true;
                } else {
                    for event in service.handle_command(cmd) {
                        model.apply_event(&event);
                    }
                }
            }
        }

        if model.should_quit {
            break;
        }
    }
    Ok(())
}
