//! Leaderboard panel — the canonical top-10 beside the chart.
//!
//! Rows come straight from the chart model, so the table can never show a
//! different ordering than the lines being drawn.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};

use ranklab_core::domain::RankedAgent;

use crate::theme::Theme;

pub struct LeaderboardPanel<'a> {
    entries: &'a [RankedAgent],
    selected_index: usize,
    theme: &'a Theme,
}

impl<'a> LeaderboardPanel<'a> {
    pub fn new(entries: &'a [RankedAgent], selected_index: usize, theme: &'a Theme) -> Self {
        Self {
            entries,
            selected_index,
            theme,
        }
    }

    fn state_label(entry: &RankedAgent) -> &'static str {
        match entry.state {
            Some(state) if state.is_expelled() => "EXPELLED",
            Some(_) => "",
            None => "",
        }
    }
}

impl<'a> Widget for LeaderboardPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Leaderboard ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .style(Style::default().bg(self.theme.background));

        let header = Row::new(["#", "User", "Symbol", "ROI", ""].iter().map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
        }))
        .height(1);

        let rows = self.entries.iter().enumerate().map(|(i, entry)| {
            let style = if i == self.selected_index {
                Style::default()
                    .bg(self.theme.selection)
                    .fg(self.theme.text_primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.text_primary)
            };

            let cells = vec![
                Cell::from(format!("{}", entry.position)),
                Cell::from(entry.user_id.as_str()),
                Cell::from(entry.symbol.as_str()),
                Cell::from(format!("{:+.2}%", entry.roi))
                    .style(Style::default().fg(self.theme.roi_color(entry.roi))),
                Cell::from(Self::state_label(entry))
                    .style(Style::default().fg(self.theme.negative)),
            ];
            Row::new(cells).style(style).height(1)
        });

        let widths = [
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Length(8),
        ];

        Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(1)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ranklab_core::domain::AgentState;

    fn entry(position: u32, roi: f64, state: AgentState) -> RankedAgent {
        RankedAgent {
            position,
            agent_id: format!("agent-{position}"),
            user_id: format!("futures-{position}"),
            symbol: "BTCUSDT".into(),
            state: Some(state),
            roi,
        }
    }

    #[test]
    fn renders_without_panic() {
        let theme = Theme::default();
        let entries = vec![
            entry(1, 9.5, AgentState::Active),
            entry(2, -3.2, AgentState::Expelled),
        ];
        let panel = LeaderboardPanel::new(&entries, 0, &theme);

        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);
    }

    #[test]
    fn expelled_entries_get_a_state_label() {
        let active = entry(1, 1.0, AgentState::Active);
        let expelled = entry(2, 1.0, AgentState::Expelled);
        assert_eq!(LeaderboardPanel::state_label(&active), "");
        assert_eq!(LeaderboardPanel::state_label(&expelled), "EXPELLED");
    }
}
