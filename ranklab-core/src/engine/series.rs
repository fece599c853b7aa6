//! Series construction — turns ranked, filtered agents into plot-ready lines.
//!
//! All four view modes derive from the same snapshot and the same rank
//! snapshot, so the chart can never disagree with a leaderboard built from
//! the same inputs. Builders return fresh structures; nothing is mutated in
//! place, and building twice from the same inputs yields identical output.

use serde::{Deserialize, Serialize};

use crate::domain::{Agent, AgentDaily, AgentState, GeneralDay, PlotPoint, PlotSeries};
use crate::engine::palette;
use crate::engine::rank::RankSnapshot;

/// Which pure pipeline runs. Transitions always fully recompute outputs;
/// there is no incremental update path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// One point per period: x = period end, y = that period's ROI.
    ByPeriod,
    /// A zero-seeded start point, then each period's own ROI at its end
    /// date. No running sum — each period's ROI already represents the
    /// state at that period's end.
    ByPeriodCumulative,
    /// One point per calendar day from the upstream cumulative field.
    Daily,
    /// Gains/losses/net aggregate curves, not agent-scoped.
    GeneralAggregate,
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ViewMode::ByPeriod => "by-period",
            ViewMode::ByPeriodCumulative => "by-period-cumulative",
            ViewMode::Daily => "daily",
            ViewMode::GeneralAggregate => "general-aggregate",
        };
        write!(f, "{name}")
    }
}

/// Build one line per included agent from its hypothesis periods.
///
/// `cumulative` selects the zero-seeded variant. Agents are styled from
/// `ranks`, never from any upstream position field.
pub fn build_period_series(
    included: &[&Agent],
    ranks: &RankSnapshot,
    cumulative: bool,
) -> Vec<PlotSeries> {
    included
        .iter()
        .filter(|agent| !agent.periods.is_empty())
        .map(|agent| {
            let mut points = Vec::with_capacity(agent.periods.len() + 1);
            if cumulative {
                if let Some(first) = agent.periods.first() {
                    points.push(PlotPoint::at(first.start_date, 0.0));
                }
            }
            for period in &agent.periods {
                points.push(PlotPoint::at(period.end_date, period.roi));
            }
            styled_series(
                &agent.agent_id,
                &agent.user_id,
                &agent.symbol,
                agent.state,
                ranks,
                points,
            )
        })
        .collect()
}

/// Build one line per included agent from its cumulative daily ROI.
pub fn build_daily_series(included: &[&AgentDaily], ranks: &RankSnapshot) -> Vec<PlotSeries> {
    included
        .iter()
        .filter(|agent| !agent.days.is_empty())
        .map(|agent| {
            let points = agent
                .days
                .iter()
                .map(|d| PlotPoint::at(d.date, d.cumulative_roi))
                .collect();
            styled_series(
                &agent.agent_id,
                &agent.user_id,
                &agent.symbol,
                agent.state,
                ranks,
                points,
            )
        })
        .collect()
}

/// Build the three aggregate curves: positive-accumulated, negative-
/// accumulated, and net = positive + negative at each matching day.
pub fn build_general_series(days: &[GeneralDay]) -> Vec<PlotSeries> {
    let gains = days
        .iter()
        .map(|d| PlotPoint::at(d.date, d.gain_cumulative))
        .collect();
    let losses = days
        .iter()
        .map(|d| PlotPoint::at(d.date, d.loss_cumulative))
        .collect();
    let net = days.iter().map(|d| PlotPoint::at(d.date, d.net())).collect();

    let curve = |label: &str, color: &str, points| PlotSeries {
        agent_id: None,
        label: label.to_string(),
        color: color.to_string(),
        weight: crate::domain::LineWeight::Heavy,
        position: None,
        state: None,
        points,
    };

    vec![
        curve("General ROI (gains)", palette::GENERAL_GAIN, gains),
        curve("General ROI (losses)", palette::GENERAL_LOSS, losses),
        curve("Net ROI", palette::GENERAL_NET, net),
    ]
}

fn styled_series(
    agent_id: &str,
    user_id: &str,
    symbol: &str,
    state: AgentState,
    ranks: &RankSnapshot,
    points: Vec<PlotPoint>,
) -> PlotSeries {
    let position = ranks.position_of(agent_id);
    let label = if state.is_expelled() {
        format!("[EXPELLED] {user_id} ({symbol})")
    } else if let Some(pos) = position.filter(|p| (1..=10).contains(p)) {
        format!("#{pos} {user_id} ({symbol})")
    } else {
        format!("{user_id} ({symbol})")
    };

    PlotSeries {
        agent_id: Some(agent_id.to_string()),
        label,
        color: palette::stroke_for(state, position).to_string(),
        weight: palette::weight_for(position),
        position,
        state: Some(state),
        points,
    }
}
