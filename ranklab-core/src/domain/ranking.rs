//! Derived ranking entries.

use serde::{Deserialize, Serialize};

use super::agent::AgentState;

/// An agent with its canonical position for one reference period.
///
/// Ephemeral: recomputed on every reference-period change, never persisted.
/// `position` is 1-based and dense — a full ranking over N agents carries
/// exactly the positions 1..=N.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAgent {
    pub position: u32,
    pub agent_id: String,
    pub user_id: String,
    pub symbol: String,
    /// Lifecycle state, when known. The general-aggregate feed's embedded
    /// top-10 does not carry one.
    pub state: Option<AgentState>,
    /// The ROI value this agent was ranked by, in percent units.
    pub roi: f64,
}

impl RankedAgent {
    pub fn is_top(&self, k: u32) -> bool {
        self.position >= 1 && self.position <= k
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_k_membership_is_inclusive() {
        let entry = RankedAgent {
            position: 10,
            agent_id: "a1".into(),
            user_id: "futures-A".into(),
            symbol: "BTCUSDT".into(),
            state: Some(AgentState::Active),
            roi: 3.2,
        };
        assert!(entry.is_top(10));
        assert!(!entry.is_top(9));
    }
}
