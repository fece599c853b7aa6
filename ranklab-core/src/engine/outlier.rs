//! Outlier classification — keeps extreme series from distorting the chart.
//!
//! The p5/p95 spread is computed for diagnostics only; the exclusion rule
//! is a fixed magnitude threshold with a hard exemption for ranked leaders.
//! Each view cadence (hypothesis periods vs. calendar days) runs its own
//! classification over its own ROI field, since the two can disagree on
//! which agents look extreme.

use crate::domain::{Agent, AgentDaily};
use crate::engine::rank::RankSnapshot;

/// ROI magnitude (percent units) beyond which an agent's series is
/// considered an outlier.
pub const ROI_MAGNITUDE_LIMIT: f64 = 1000.0;

/// Canonical positions that are never filtered, no matter how extreme.
pub const PROTECTED_RANKS: u32 = 10;

/// Percentile spread of all ROI values in one view — diagnostic only, does
/// not gate inclusion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiSpread {
    pub p5: f64,
    pub p95: f64,
    pub samples: usize,
}

impl RoiSpread {
    /// Percentile spread over an arbitrary value collection: indexes
    /// `floor(n * 0.05)` and `floor(n * 0.95)` of the ascending sort.
    pub fn from_values(mut values: Vec<f64>) -> Self {
        if values.is_empty() {
            return Self {
                p5: 0.0,
                p95: 0.0,
                samples: 0,
            };
        }
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let n = values.len();
        let p5_idx = (n as f64 * 0.05).floor() as usize;
        let p95_idx = ((n as f64 * 0.95).floor() as usize).min(n - 1);
        Self {
            p5: values[p5_idx],
            p95: values[p95_idx],
            samples: n,
        }
    }
}

impl std::fmt::Display for RoiSpread {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ROI spread p5 {:.2}% .. p95 {:.2}% over {} samples",
            self.p5, self.p95, self.samples
        )
    }
}

/// Outcome of classifying one view's agents.
#[derive(Debug)]
pub struct Classification<'a, T> {
    pub included: Vec<&'a T>,
    pub excluded: Vec<&'a T>,
    pub spread: RoiSpread,
}

/// Classify the hypothesis-period view over period ROI values.
pub fn classify_periods<'a>(
    agents: &'a [Agent],
    ranks: &RankSnapshot,
) -> Classification<'a, Agent> {
    classify(
        agents,
        |agent| agent.periods.iter().map(|p| p.roi).collect(),
        |agent| agent.agent_id.as_str(),
        ranks,
    )
}

/// Classify the calendar-day view over cumulative daily ROI values.
pub fn classify_daily<'a>(
    agents: &'a [AgentDaily],
    ranks: &RankSnapshot,
) -> Classification<'a, AgentDaily> {
    classify(
        agents,
        |agent| agent.days.iter().map(|d| d.cumulative_roi).collect(),
        |agent| agent.agent_id.as_str(),
        ranks,
    )
}

fn classify<'a, T, V, I>(items: &'a [T], values_of: V, id_of: I, ranks: &RankSnapshot) -> Classification<'a, T>
where
    V: Fn(&T) -> Vec<f64>,
    I: Fn(&T) -> &str,
{
    let all_values: Vec<f64> = items.iter().flat_map(|item| values_of(item)).collect();
    let spread = RoiSpread::from_values(all_values);

    let mut included = Vec::with_capacity(items.len());
    let mut excluded = Vec::new();

    for item in items {
        let values = values_of(item);
        // An agent with no values cannot be plotted at all, leader or not.
        if values.is_empty() {
            excluded.push(item);
            continue;
        }

        let max_abs = values.iter().map(|v| v.abs()).fold(0.0, f64::max);
        let protected = ranks.is_top(id_of(item), PROTECTED_RANKS);
        if max_abs > ROI_MAGNITUDE_LIMIT && !protected {
            excluded.push(item);
        } else {
            included.push(item);
        }
    }

    Classification {
        included,
        excluded,
        spread,
    }
}
