//! Point-in-time top-K extraction for tooltips and drill-downs.
//!
//! Delegates to the rank engine so an interactive "click point → show
//! leaderboard" feature is always consistent with the lines already drawn.
//! Callers must resolve the reference exactly the way the chart plotted the
//! point: by end date for date-keyed views, by period slot for aligned
//! index lookups.

use chrono::NaiveDate;

use crate::domain::{Agent, GeneralDay, GeneralTopEntry, RankedAgent};
use crate::engine::rank;

/// How a single chart point is identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKey {
    /// A period end date (period-based views).
    EndDate(NaiveDate),
    /// A positional period slot (aligned-index lookups).
    PeriodIndex(usize),
}

/// The top `k` agents at one point in time, under the canonical ranking
/// rule. Identical to `rank(...)` truncated to `k`.
pub fn top_k_at(agents: &[Agent], key: ReferenceKey, k: usize) -> Vec<RankedAgent> {
    let mut ranking = match key {
        ReferenceKey::EndDate(end) => rank::rank(agents, end),
        ReferenceKey::PeriodIndex(idx) => rank::rank_by_period_index(agents, idx),
    };
    ranking.truncate(k);
    ranking
}

/// The externally supplied top-10 for one day of the general-aggregate
/// feed. Trusted as-is: aggregate ranking is not agent-period based, so the
/// engine does not recompute it. Missing day degrades to an empty slice.
pub fn general_top_at<'a>(days: &'a [GeneralDay], date: NaiveDate) -> &'a [GeneralTopEntry] {
    days.iter()
        .find(|d| d.date == date)
        .map_or(&[], |d| d.top10.as_slice())
}

/// Adapt the aggregate feed's embedded entries to leaderboard rows.
pub fn general_entries_as_ranked(entries: &[GeneralTopEntry]) -> Vec<RankedAgent> {
    entries
        .iter()
        .map(|e| RankedAgent {
            position: e.position,
            agent_id: e.agent_id.clone(),
            user_id: e.user_id.clone(),
            symbol: e.symbol.clone(),
            state: None,
            roi: e.roi,
        })
        .collect()
}
