//! Keyboard dispatch: view-mode switching, display filters, selection.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use ranklab_core::engine::ViewMode;

use crate::app::App;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,

        KeyCode::Char('1') => app.set_view(ViewMode::ByPeriod),
        KeyCode::Char('2') => app.set_view(ViewMode::ByPeriodCumulative),
        KeyCode::Char('3') => app.set_view(ViewMode::Daily),
        KeyCode::Char('4') => app.set_view(ViewMode::GeneralAggregate),

        KeyCode::Char('t') => app.toggle_top_only(),
        KeyCode::Char('x') => app.toggle_show_expelled(),
        KeyCode::Char('r') => app.recompute(),

        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),

        KeyCode::Char('h') | KeyCode::Left => app.step_reference(-1),
        KeyCode::Char('l') | KeyCode::Right => app.step_reference(1),

        _ => {}
    }
}
