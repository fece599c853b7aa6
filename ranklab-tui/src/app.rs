//! Application state — single-owner, main-thread only.
//!
//! Every view-mode or filter change throws the previous chart model away
//! and recomputes from the snapshot. There is no partial-update path, so
//! the chart, leaderboard, and status line always describe the same
//! instant.

use chrono::NaiveDate;

use ranklab_client::DashboardSnapshot;
use ranklab_core::domain::PlotSeries;
use ranklab_core::engine::{
    build_daily_view, build_general_view, build_period_view, general_entries_as_ranked,
    general_top_at, leaderboard_at, ChartModel, ViewMode,
};

pub struct App {
    pub snapshot: DashboardSnapshot,
    pub view: ViewMode,
    /// Show only series ranked in the top 10. On by default; expelled
    /// agents that hold a top-10 rank stay visible while this is on.
    pub top_only: bool,
    /// Off by default: outside the top-10 filter, expelled agents are
    /// hidden until explicitly requested.
    pub show_expelled: bool,
    pub model: ChartModel,
    /// Reference points the current view can step through.
    refs: Vec<NaiveDate>,
    /// Index of the active reference point within `refs`.
    ref_idx: usize,
    /// Selected leaderboard row.
    pub selected: usize,
    pub status: String,
    pub running: bool,
}

impl App {
    pub fn new(snapshot: DashboardSnapshot) -> Self {
        let mut app = Self {
            model: build_period_view(&snapshot.agents, false),
            snapshot,
            view: ViewMode::ByPeriod,
            top_only: true,
            show_expelled: false,
            refs: Vec::new(),
            ref_idx: 0,
            selected: 0,
            status: String::new(),
            running: true,
        };
        app.recompute();
        app
    }

    /// Switch view mode and fully recompute.
    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
        self.recompute();
    }

    pub fn toggle_top_only(&mut self) {
        self.top_only = !self.top_only;
        self.refresh_status();
    }

    pub fn toggle_show_expelled(&mut self) {
        self.show_expelled = !self.show_expelled;
        self.refresh_status();
    }

    pub fn recompute(&mut self) {
        self.model = match self.view {
            ViewMode::ByPeriod => build_period_view(&self.snapshot.agents, false),
            ViewMode::ByPeriodCumulative => build_period_view(&self.snapshot.agents, true),
            ViewMode::Daily => build_daily_view(&self.snapshot.daily, &self.snapshot.agents),
            ViewMode::GeneralAggregate => build_general_view(&self.snapshot.general),
        };
        self.refs = self.reference_dates();
        self.ref_idx = self.refs.len().saturating_sub(1);
        self.selected = 0;
        self.refresh_status();
    }

    /// The dates a user can step the reference point through, per view.
    fn reference_dates(&self) -> Vec<NaiveDate> {
        match self.view {
            ViewMode::ByPeriod | ViewMode::ByPeriodCumulative => self
                .snapshot
                .agents
                .first()
                .map(|a| a.periods.iter().map(|p| p.end_date).collect())
                .unwrap_or_default(),
            ViewMode::Daily => self
                .snapshot
                .daily
                .iter()
                .max_by_key(|a| a.days.len())
                .map(|a| a.days.iter().map(|d| d.date).collect())
                .unwrap_or_default(),
            ViewMode::GeneralAggregate => {
                self.snapshot.general.iter().map(|d| d.date).collect()
            }
        }
    }

    /// Step the reference point and reseed the leaderboard for it. The
    /// period views rerun the canonical ranking at the new date; the
    /// aggregate view swaps in that day's embedded top-10. The daily view
    /// only moves the selection marker, since its ranking comes from the
    /// period snapshot.
    pub fn step_reference(&mut self, delta: isize) {
        if self.refs.is_empty() {
            return;
        }
        let last = self.refs.len() as isize - 1;
        let idx = (self.ref_idx as isize + delta).clamp(0, last) as usize;
        if idx == self.ref_idx {
            return;
        }
        self.ref_idx = idx;
        let date = self.refs[idx];
        self.model.selection = Some(date);

        match self.view {
            ViewMode::ByPeriod | ViewMode::ByPeriodCumulative => {
                self.model.leaderboard = leaderboard_at(&self.snapshot.agents, date);
            }
            ViewMode::GeneralAggregate => {
                self.model.leaderboard =
                    general_entries_as_ranked(general_top_at(&self.snapshot.general, date));
            }
            ViewMode::Daily => {}
        }
        self.selected = 0;
        self.refresh_status();
    }

    /// Series that survive the display filters, in model order.
    pub fn visible_series(&self) -> Vec<&PlotSeries> {
        self.model
            .series
            .iter()
            .filter(|s| self.is_visible(s))
            .collect()
    }

    fn is_visible(&self, series: &PlotSeries) -> bool {
        // Aggregate curves carry no agent; filters do not apply.
        if series.agent_id.is_none() {
            return true;
        }
        if self.top_only {
            return series.position.is_some_and(|p| (1..=10).contains(&p));
        }
        let expelled = series.state.is_some_and(|s| s.is_expelled());
        !expelled || self.show_expelled
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.model.leaderboard.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn refresh_status(&mut self) {
        let shown = self.visible_series().len();
        let reference = match self.model.selection {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => "no data".to_string(),
        };
        self.status = format!(
            "{} | hypothesis {} | ref {} | {} of {} lines | {}",
            self.view,
            self.snapshot.hypothesis,
            reference,
            shown,
            self.model.series.len(),
            self.model.spread,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ranklab_client::sample_snapshot;

    fn demo_app() -> App {
        App::new(sample_snapshot(42))
    }

    #[test]
    fn starts_in_period_view_with_top_filter_on() {
        let app = demo_app();
        assert_eq!(app.view, ViewMode::ByPeriod);
        assert!(app.top_only);
        assert!(!app.show_expelled);
        assert!(app.model.selection.is_some());
    }

    #[test]
    fn top_filter_limits_visible_series_to_ranked_leaders() {
        let mut app = demo_app();
        let top = app.visible_series();
        assert!(top
            .iter()
            .all(|s| s.position.is_some_and(|p| (1..=10).contains(&p))));

        let top_len = top.len();
        app.toggle_top_only();
        assert!(app.visible_series().len() >= top_len);
    }

    #[test]
    fn expelled_hidden_until_requested_outside_top_filter() {
        let mut app = demo_app();
        app.toggle_top_only();

        let expelled_ids = |app: &App| -> Vec<String> {
            app.visible_series()
                .iter()
                .filter(|s| s.state.is_some_and(|st| st.is_expelled()))
                .filter_map(|s| s.agent_id.clone())
                .collect()
        };

        // The sample field always carries exactly one expelled agent with
        // in-range ROIs, so its series survives classification. Outside the
        // top-10 filter it stays hidden until explicitly requested.
        assert!(app
            .model
            .series
            .iter()
            .any(|s| s.state.is_some_and(|st| st.is_expelled())));
        assert!(expelled_ids(&app).is_empty());
        let hidden_count = app.visible_series().len();

        app.toggle_show_expelled();
        assert_eq!(expelled_ids(&app), vec!["agent-10".to_string()]);
        assert_eq!(app.visible_series().len(), hidden_count + 1);
    }

    #[test]
    fn view_transitions_fully_recompute() {
        let mut app = demo_app();
        app.selected = 3;
        app.set_view(ViewMode::GeneralAggregate);
        assert_eq!(app.selected, 0);
        assert_eq!(app.model.series.len(), 3);
        // Aggregate curves ignore agent filters entirely.
        assert_eq!(app.visible_series().len(), 3);
    }

    #[test]
    fn stepping_back_reseeds_the_leaderboard() {
        let mut app = demo_app();
        let latest = app.model.selection;
        app.step_reference(-1);
        assert_ne!(app.model.selection, latest);
        assert!(app.model.selection < latest);

        // Stepping forward again restores the seeded reference.
        app.step_reference(1);
        assert_eq!(app.model.selection, latest);

        // Clamped at both ends.
        for _ in 0..100 {
            app.step_reference(1);
        }
        assert_eq!(app.model.selection, latest);
    }

    #[test]
    fn general_view_steps_through_days() {
        let mut app = demo_app();
        app.set_view(ViewMode::GeneralAggregate);
        let last_day = app.snapshot.general.last().map(|d| d.date);
        assert_eq!(app.model.selection, last_day);

        app.step_reference(-1);
        let expected = app.snapshot.general[app.snapshot.general.len() - 2].date;
        assert_eq!(app.model.selection, Some(expected));
        // The leaderboard now shows that day's embedded top-10.
        let day_top = &app.snapshot.general[app.snapshot.general.len() - 2].top10;
        assert_eq!(app.model.leaderboard.len(), day_top.len());
    }

    #[test]
    fn selection_stays_inside_leaderboard() {
        let mut app = demo_app();
        for _ in 0..100 {
            app.select_next();
        }
        assert!(app.selected < app.model.leaderboard.len());
        for _ in 0..100 {
            app.select_prev();
        }
        assert_eq!(app.selected, 0);
    }
}
