//! Full recomputation pipeline: snapshot in, render-ready model out.
//!
//! Every view-mode, hypothesis, or date-filter change reruns one of these
//! builders over the snapshot. Each call is a pure function of its inputs:
//! no shared buffers, no incremental path, identical inputs produce
//! identical output.

use chrono::NaiveDate;

use crate::domain::{Agent, AgentDaily, GeneralDay, PlotSeries, RankedAgent};
use crate::engine::outlier::{self, RoiSpread};
use crate::engine::period_index;
use crate::engine::rank::{self, RankSnapshot};
use crate::engine::series;
use crate::engine::topk;

/// The render-ready product of one recomputation.
#[derive(Debug)]
pub struct ChartModel {
    /// Ordered lines for the chart, already filtered and styled.
    pub series: Vec<PlotSeries>,
    /// Canonical leaderboard for the seeded selection. A sibling display
    /// (e.g. a textual top-10 beside the chart) reads this, so chart and
    /// leaderboard can never show mismatched lists for the same instant.
    pub leaderboard: Vec<RankedAgent>,
    /// Default reference selection: the latest period end or latest day.
    pub selection: Option<NaiveDate>,
    /// p5/p95 diagnostics for the view's ROI values.
    pub spread: RoiSpread,
}

/// How many leaderboard rows a model carries by default.
pub const LEADERBOARD_SIZE: usize = 10;

/// Build the hypothesis-period view (raw or zero-seeded cumulative).
pub fn build_period_view(agents: &[Agent], cumulative: bool) -> ChartModel {
    let selection = period_index::latest_end_date(agents);
    let (ranking, ranks) = rank_at(agents, selection);

    let classified = outlier::classify_periods(agents, &ranks);
    let series = series::build_period_series(&classified.included, &ranks, cumulative);

    ChartModel {
        series,
        leaderboard: truncated(ranking),
        selection,
        spread: classified.spread,
    }
}

/// Build the calendar-day view.
///
/// The canonical ranking still comes from the period snapshot — daily
/// payloads carry only advisory positions.
pub fn build_daily_view(daily: &[AgentDaily], rank_source: &[Agent]) -> ChartModel {
    let reference = period_index::latest_end_date(rank_source);
    let (ranking, ranks) = rank_at(rank_source, reference);

    let classified = outlier::classify_daily(daily, &ranks);
    let series = series::build_daily_series(&classified.included, &ranks);

    let selection = daily
        .iter()
        .filter_map(|agent| agent.days.last().map(|d| d.date))
        .max();

    ChartModel {
        series,
        leaderboard: truncated(ranking),
        selection,
        spread: classified.spread,
    }
}

/// Build the general-aggregate view. The leaderboard is the embedded
/// top-10 of the seeded (latest) day, consumed as supplied.
pub fn build_general_view(days: &[GeneralDay]) -> ChartModel {
    let series = series::build_general_series(days);
    let selection = days.last().map(|d| d.date);

    let leaderboard = selection
        .map(|date| topk::general_entries_as_ranked(topk::general_top_at(days, date)))
        .unwrap_or_default();

    let all_values: Vec<f64> = days
        .iter()
        .flat_map(|d| [d.gain_cumulative, d.loss_cumulative])
        .collect();

    ChartModel {
        series,
        leaderboard,
        selection,
        spread: RoiSpread::from_values(all_values),
    }
}

/// Re-seed the leaderboard of a period view for a user-selected reference
/// date (chart point click). Same ranking rule as the initial build.
pub fn leaderboard_at(agents: &[Agent], reference: NaiveDate) -> Vec<RankedAgent> {
    topk::top_k_at(agents, topk::ReferenceKey::EndDate(reference), LEADERBOARD_SIZE)
}

fn rank_at(agents: &[Agent], reference: Option<NaiveDate>) -> (Vec<RankedAgent>, RankSnapshot) {
    match reference {
        Some(end) => {
            let ranking = rank::rank(agents, end);
            let ranks = RankSnapshot::from_ranking(&ranking);
            (ranking, ranks)
        }
        None => (Vec::new(), RankSnapshot::default()),
    }
}

fn truncated(mut ranking: Vec<RankedAgent>) -> Vec<RankedAgent> {
    ranking.truncate(LEADERBOARD_SIZE);
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AgentState, DailyRoi, GeneralTopEntry, Period};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn agent(id: &str, rois: &[f64]) -> Agent {
        Agent {
            agent_id: id.into(),
            user_id: format!("futures-{id}"),
            symbol: "BTCUSDT".into(),
            state: AgentState::Active,
            periods: rois
                .iter()
                .enumerate()
                .map(|(i, &roi)| {
                    let end = date("2025-05-05") + chrono::Duration::days(5 * i as i64);
                    Period {
                        index: i,
                        start_date: end - chrono::Duration::days(4),
                        end_date: end,
                        roi,
                        starting_balance: 1000.0,
                        closed_pnl: 0.0,
                        trade_count: 1,
                    }
                })
                .collect(),
        }
    }

    #[test]
    fn period_view_seeds_latest_end_and_leaderboard() {
        let agents = vec![agent("a", &[1.0, 5.0]), agent("b", &[2.0, 3.0])];
        let model = build_period_view(&agents, false);

        assert_eq!(model.selection, Some(date("2025-05-10")));
        assert_eq!(model.leaderboard[0].agent_id, "a");
        assert_eq!(model.series.len(), 2);

        // The chart's styling and the leaderboard agree on #1.
        let top_line = model
            .series
            .iter()
            .find(|s| s.position == Some(1))
            .unwrap();
        assert_eq!(top_line.agent_id.as_deref(), Some("a"));
    }

    #[test]
    fn empty_snapshot_renders_as_no_data() {
        let model = build_period_view(&[], false);
        assert!(model.series.is_empty());
        assert!(model.leaderboard.is_empty());
        assert_eq!(model.selection, None);
        assert_eq!(model.spread.samples, 0);
    }

    #[test]
    fn daily_view_ranks_from_period_snapshot() {
        let rank_source = vec![agent("a", &[1.0]), agent("b", &[9.0])];
        let daily = vec![AgentDaily {
            agent_id: "a".into(),
            user_id: "futures-a".into(),
            symbol: "BTCUSDT".into(),
            state: AgentState::Active,
            // Backend claims #1; the canonical rank says #2.
            reported_position: 1,
            days: vec![DailyRoi {
                date: date("2025-05-02"),
                cumulative_roi: 4.0,
                daily_roi: 4.0,
                closed_pnl: 0.0,
                balance: 1000.0,
            }],
        }];

        let model = build_daily_view(&daily, &rank_source);
        assert_eq!(model.series[0].position, Some(2));
        assert_eq!(model.leaderboard[0].agent_id, "b");
        assert_eq!(model.selection, Some(date("2025-05-02")));
    }

    #[test]
    fn general_view_trusts_embedded_top10_of_latest_day() {
        let days = vec![
            GeneralDay {
                date: date("2025-05-01"),
                gain_cumulative: 5.0,
                loss_cumulative: -1.0,
                top10: vec![],
            },
            GeneralDay {
                date: date("2025-05-02"),
                gain_cumulative: 8.0,
                loss_cumulative: -3.0,
                top10: vec![GeneralTopEntry {
                    agent_id: "z".into(),
                    user_id: "futures-z".into(),
                    symbol: "XRPUSDT".into(),
                    position: 1,
                    roi: 6.0,
                }],
            },
        ];

        let model = build_general_view(&days);
        assert_eq!(model.selection, Some(date("2025-05-02")));
        assert_eq!(model.leaderboard.len(), 1);
        assert_eq!(model.leaderboard[0].agent_id, "z");
        assert_eq!(model.series.len(), 3);
    }

    #[test]
    fn reseeded_leaderboard_matches_full_ranking_prefix() {
        let agents: Vec<Agent> = (0..12)
            .map(|i| agent(&format!("a{i}"), &[i as f64]))
            .collect();
        let reference = date("2025-05-05");

        let reseeded = leaderboard_at(&agents, reference);
        let full = rank::rank(&agents, reference);
        assert_eq!(reseeded.len(), LEADERBOARD_SIZE);
        assert_eq!(&full[..LEADERBOARD_SIZE], &reseeded[..]);
    }
}
