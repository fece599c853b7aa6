//! Canonical ranking — the single source of truth for "who is #1".
//!
//! Upstream payloads embed a `position` field; it is advisory only. Every
//! consumer that needs an ordering (chart styling, leaderboards, tooltips)
//! calls through here so a chart and an adjacent table can never disagree.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::{Agent, RankedAgent};
use crate::engine::period_index::PeriodIndex;

use super::period_index;

/// Rank all agents by their ROI for the period ending on `reference_end`.
///
/// An agent with no period ending on the reference date is ranked with
/// ROI 0 — newcomers stay on the leaderboard as flat, they are never
/// silently dropped. Sort is descending by ROI and stable: ties keep input
/// order. Positions are dense, 1..=N.
pub fn rank(agents: &[Agent], reference_end: NaiveDate) -> Vec<RankedAgent> {
    let index = PeriodIndex::build(agents);
    rank_with(agents, |agent| index.roi_at(&agent.agent_id, reference_end))
}

/// Same ordering rule as [`rank`], but looking up each agent's period by
/// positional index instead of end date.
///
/// Used when iterating over aligned period slots (e.g. "who was #1 on chart
/// point 7"). An agent with fewer periods than `period_idx` is the
/// missing-reference case: ROI 0, not an error.
pub fn rank_by_period_index(agents: &[Agent], period_idx: usize) -> Vec<RankedAgent> {
    rank_with(agents, |agent| {
        agent.periods.get(period_idx).map_or(0.0, |p| p.roi)
    })
}

fn rank_with<F>(agents: &[Agent], roi_of: F) -> Vec<RankedAgent>
where
    F: Fn(&Agent) -> f64,
{
    let mut entries: Vec<RankedAgent> = agents
        .iter()
        .map(|agent| RankedAgent {
            position: 0,
            agent_id: agent.agent_id.clone(),
            user_id: agent.user_id.clone(),
            symbol: agent.symbol.clone(),
            state: Some(agent.state),
            roi: roi_of(agent),
        })
        .collect();

    // Stable sort: equal ROIs keep input order. NaN never comes out of
    // roi_of's defaults, but compare defensively to Equal anyway.
    entries.sort_by(|a, b| {
        b.roi
            .partial_cmp(&a.roi)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for (i, entry) in entries.iter_mut().enumerate() {
        entry.position = (i + 1) as u32;
    }
    entries
}

/// Positions keyed by agent id, for O(1) lookups during series styling and
/// outlier classification.
#[derive(Debug, Default)]
pub struct RankSnapshot {
    positions: HashMap<String, u32>,
}

impl RankSnapshot {
    pub fn from_ranking(ranking: &[RankedAgent]) -> Self {
        Self {
            positions: ranking
                .iter()
                .map(|r| (r.agent_id.clone(), r.position))
                .collect(),
        }
    }

    /// Ranking at the snapshot's canonical reference point (the latest
    /// period end of the first agent). Empty when there is nothing to rank.
    pub fn at_latest(agents: &[Agent]) -> Self {
        match period_index::latest_end_date(agents) {
            Some(end) => Self::from_ranking(&rank(agents, end)),
            None => Self::default(),
        }
    }

    pub fn position_of(&self, agent_id: &str) -> Option<u32> {
        self.positions.get(agent_id).copied()
    }

    pub fn is_top(&self, agent_id: &str, k: u32) -> bool {
        self.position_of(agent_id)
            .is_some_and(|pos| pos >= 1 && pos <= k)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
