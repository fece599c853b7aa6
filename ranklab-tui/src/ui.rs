//! Frame layout: chart left, leaderboard right, status bar at the bottom.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::panels::{ChartPanel, LeaderboardPanel};
use crate::theme::Theme;

pub fn draw(frame: &mut Frame, app: &App) {
    let theme = Theme::default();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(1)])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(rows[0]);

    let visible = app.visible_series();
    let title = app.view.to_string();
    frame.render_widget(ChartPanel::new(&visible, &title, &theme), columns[0]);
    frame.render_widget(
        LeaderboardPanel::new(&app.model.leaderboard, app.selected, &theme),
        columns[1],
    );

    let status = Line::from(vec![
        Span::styled(app.status.clone(), Style::default().fg(theme.text_primary)),
        Span::styled(
            "  [1-4] view  [t] top-10  [x] expelled  [h/l] ref  [q] quit",
            Style::default().fg(theme.muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(status), rows[1]);
}
