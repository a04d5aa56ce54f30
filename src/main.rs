mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::{info, warn};

use cli::Cli;
use listbox::config::Config;
use listbox::input::{map_key_to_intent, map_mouse_to_intent};
use listbox::source;
use listbox::util::logging;
use listbox::view;
use listbox::viewmodel::{Action, AppViewModel};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().or_else(logging::default_log_path);
    match &log_path {
        Some(path) => logging::init(path)?,
        None => eprintln!("No cache directory, logging disabled"),
    }

    let config = Config::load(cli.config.as_deref())?;
    let theme = config.theme.to_theme()?;
    let overflow = cli.overflow.unwrap_or(config.overflow);

    let items = source::load(&cli.path, cli.lines).await?;
    if items.is_empty() {
        warn!(path = %cli.path.display(), "nothing to list");
    }
    let title = cli.path.display().to_string();
    info!(%title, count = items.len(), %overflow, "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppViewModel::new(title, items, &theme, overflow);
    let outcome = run(&mut terminal, &mut app);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Some(value) = outcome.context("UI loop failed")? {
        println!("{}", value);
    }
    Ok(())
}

/// Main event loop; returns the chosen value, if any
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppViewModel) -> Result<Option<String>> {
    loop {
        terminal.draw(|f| {
            let area = f.area();
            view::render(f, app, area);
        })?;

        let intent = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => map_key_to_intent(&key),
            Event::Mouse(mouse) => map_mouse_to_intent(&mouse),
            _ => None,
        };

        if let Some(intent) = intent {
            match app.handle_intent(intent) {
                Action::Quit => return Ok(None),
                Action::Choose(value) => return Ok(Some(value)),
                Action::Redraw => {}
            }
        }
    }
}
