//! Terminal dashboard entry point.
//!
//! Usage:
//!   ranklab-tui                   seeded demo data
//!   ranklab-tui snapshot.json     a previously saved snapshot

use std::io::{self, stdout};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use ranklab_client::{sample_snapshot, DashboardSnapshot};
use ranklab_tui::{handle_key, ui, App};

fn main() -> Result<()> {
    let snapshot = load_snapshot()?;
    let mut app = App::new(snapshot);

    // Restore the terminal before printing any panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn load_snapshot() -> Result<DashboardSnapshot> {
    match std::env::args().nth(1) {
        Some(path) => DashboardSnapshot::read_from(Path::new(&path))
            .with_context(|| format!("failed to load snapshot from {path}")),
        None => Ok(sample_snapshot(42)),
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // 50ms poll for ~20 FPS tick.
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                handle_key(app, key);
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}
