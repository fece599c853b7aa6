//! Calendar-day ROI records — a different cadence than hypothesis periods.
//!
//! Daily data arrives already cumulative from the backend and is keyed by
//! ISO date rather than period index. It must reconcile to the same ranking
//! rule as the period view when both are shown side by side.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::agent::AgentState;

/// One agent's cumulative ROI state on a single calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRoi {
    pub date: NaiveDate,
    /// Cumulative ROI up to this day, in percent units. Already accumulated
    /// upstream — the engine never re-sums it.
    pub cumulative_roi: f64,
    /// ROI contributed by this day alone.
    pub daily_roi: f64,
    pub closed_pnl: f64,
    pub balance: f64,
}

/// Per-agent daily ROI series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDaily {
    pub agent_id: String,
    pub user_id: String,
    pub symbol: String,
    pub state: AgentState,
    /// Position claimed by the backend. Advisory only — the canonical rank
    /// is always recomputed by the rank engine.
    pub reported_position: u32,
    pub days: Vec<DailyRoi>,
}

impl AgentDaily {
    /// Largest absolute cumulative ROI magnitude across this agent's days.
    ///
    /// Returns 0.0 for an agent with no days.
    pub fn max_abs_roi(&self) -> f64 {
        self.days
            .iter()
            .map(|d| d.cumulative_roi.abs())
            .fold(0.0, f64::max)
    }
}

/// One entry of the externally supplied top-10 embedded in the general feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralTopEntry {
    pub agent_id: String,
    pub user_id: String,
    pub symbol: String,
    pub position: u32,
    /// ROI for the ranked period, in percent units.
    pub roi: f64,
}

/// One day of the aggregated "general" feed: total ROI split into a
/// positive (gains) and a negative (losses) cumulative component, plus the
/// day's top-10 as supplied by the backend.
///
/// The aggregate ranking is not agent-period based, so the embedded top-10
/// is trusted as-is rather than recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralDay {
    pub date: NaiveDate,
    /// Accumulated positive ROI component, in percent units.
    pub gain_cumulative: f64,
    /// Accumulated negative ROI component (a value <= 0), in percent units.
    pub loss_cumulative: f64,
    pub top10: Vec<GeneralTopEntry>,
}

impl GeneralDay {
    /// Net ROI for the day: pointwise sum of the two components.
    pub fn net(&self) -> f64 {
        self.gain_cumulative + self.loss_cumulative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, cumulative: f64) -> DailyRoi {
        DailyRoi {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            cumulative_roi: cumulative,
            daily_roi: 0.0,
            closed_pnl: 0.0,
            balance: 1000.0,
        }
    }

    #[test]
    fn daily_max_abs_roi_tracks_cumulative_field() {
        let agent = AgentDaily {
            agent_id: "a1".into(),
            user_id: "futures-A".into(),
            symbol: "ETHUSDT".into(),
            state: AgentState::Active,
            reported_position: 3,
            days: vec![day("2025-05-01", 4.0), day("2025-05-02", -9.5)],
        };
        assert_eq!(agent.max_abs_roi(), 9.5);
    }

    #[test]
    fn general_day_net_is_component_sum() {
        let d = GeneralDay {
            date: NaiveDate::from_ymd_opt(2025, 5, 7).unwrap(),
            gain_cumulative: 120.0,
            loss_cumulative: -45.0,
            top10: vec![],
        };
        assert_eq!(d.net(), 75.0);
    }
}
