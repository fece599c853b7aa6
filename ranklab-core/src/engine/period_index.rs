//! Period lookup by end date.
//!
//! Agents sharing a hypothesis have periods aligned by end date, but an
//! agent that joined late (or was filtered upstream) may carry fewer
//! periods. The index makes the by-date lookup explicit instead of scanning
//! each agent's period list at every ranking call.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::{Agent, Period};

/// Per-agent mapping from period end date to the period record.
///
/// Borrows the snapshot; valid for one computation pass.
#[derive(Debug)]
pub struct PeriodIndex<'a> {
    by_agent: HashMap<&'a str, HashMap<NaiveDate, &'a Period>>,
}

impl<'a> PeriodIndex<'a> {
    pub fn build(agents: &'a [Agent]) -> Self {
        let mut by_agent: HashMap<&str, HashMap<NaiveDate, &Period>> =
            HashMap::with_capacity(agents.len());
        for agent in agents {
            let per_agent = by_agent.entry(agent.agent_id.as_str()).or_default();
            for period in &agent.periods {
                per_agent.insert(period.end_date, period);
            }
        }
        Self { by_agent }
    }

    /// The period of `agent_id` ending on `end_date`, if any.
    pub fn period_for(&self, agent_id: &str, end_date: NaiveDate) -> Option<&'a Period> {
        self.by_agent.get(agent_id)?.get(&end_date).copied()
    }

    /// ROI of `agent_id` for the period ending on `end_date`.
    ///
    /// Missing agent or missing period both degrade to 0.0 — an agent with
    /// no period at the reference date is ranked flat, never excluded.
    pub fn roi_at(&self, agent_id: &str, end_date: NaiveDate) -> f64 {
        self.period_for(agent_id, end_date).map_or(0.0, |p| p.roi)
    }
}

/// The canonical "current" reference point of a snapshot: the end date of
/// the last period of the **first** agent in the input sequence.
///
/// Callers must not recompute this per agent — agents may have differing
/// period counts. Returns `None` when there is nothing to rank (empty
/// input, or a first agent with no periods).
pub fn latest_end_date(agents: &[Agent]) -> Option<NaiveDate> {
    agents.first()?.periods.last().map(|p| p.end_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AgentState;

    fn period(index: usize, start: &str, end: &str, roi: f64) -> Period {
        Period {
            index,
            start_date: NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap(),
            end_date: NaiveDate::parse_from_str(end, "%Y-%m-%d").unwrap(),
            roi,
            starting_balance: 1000.0,
            closed_pnl: roi * 10.0,
            trade_count: 3,
        }
    }

    fn agent(id: &str, periods: Vec<Period>) -> Agent {
        Agent {
            agent_id: id.into(),
            user_id: format!("futures-{id}"),
            symbol: "BTCUSDT".into(),
            state: AgentState::Active,
            periods,
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn finds_period_by_end_date() {
        let agents = vec![agent(
            "a1",
            vec![
                period(0, "2025-05-01", "2025-05-05", 2.0),
                period(1, "2025-05-06", "2025-05-10", -1.5),
            ],
        )];
        let index = PeriodIndex::build(&agents);

        let p = index.period_for("a1", date("2025-05-10")).unwrap();
        assert_eq!(p.roi, -1.5);
        assert_eq!(index.roi_at("a1", date("2025-05-05")), 2.0);
    }

    #[test]
    fn missing_period_degrades_to_flat_roi() {
        let agents = vec![agent("a1", vec![period(0, "2025-05-01", "2025-05-05", 2.0)])];
        let index = PeriodIndex::build(&agents);

        assert!(index.period_for("a1", date("2025-05-10")).is_none());
        assert_eq!(index.roi_at("a1", date("2025-05-10")), 0.0);
        assert_eq!(index.roi_at("unknown", date("2025-05-05")), 0.0);
    }

    #[test]
    fn latest_end_date_uses_first_agent_only() {
        let agents = vec![
            agent("a1", vec![period(0, "2025-05-01", "2025-05-05", 2.0)]),
            agent(
                "a2",
                vec![
                    period(0, "2025-05-01", "2025-05-05", 1.0),
                    period(1, "2025-05-06", "2025-05-10", 1.0),
                ],
            ),
        ];
        // a2 has a later period, but the first agent defines the reference.
        assert_eq!(latest_end_date(&agents), Some(date("2025-05-05")));
    }

    #[test]
    fn latest_end_date_is_none_when_nothing_to_rank() {
        assert_eq!(latest_end_date(&[]), None);
        let agents = vec![agent("a1", vec![])];
        assert_eq!(latest_end_date(&agents), None);
    }
}
