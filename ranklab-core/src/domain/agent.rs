//! Agents and their ROI measurement periods.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which ROI calculation variant is being viewed.
///
/// One of a small fixed set of period cadences. Orthogonal to the ranking
/// logic itself — every pipeline works identically for any hypothesis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Hypothesis {
    H3,
    #[default]
    H5,
    H7,
    H10,
    H15,
}

impl Hypothesis {
    pub const ALL: [Hypothesis; 5] = [
        Hypothesis::H3,
        Hypothesis::H5,
        Hypothesis::H7,
        Hypothesis::H10,
        Hypothesis::H15,
    ];

    /// The period length in days that names this hypothesis.
    pub fn days(&self) -> u8 {
        match self {
            Hypothesis::H3 => 3,
            Hypothesis::H5 => 5,
            Hypothesis::H7 => 7,
            Hypothesis::H10 => 10,
            Hypothesis::H15 => 15,
        }
    }
}

impl TryFrom<u8> for Hypothesis {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(Hypothesis::H3),
            5 => Ok(Hypothesis::H5),
            7 => Ok(Hypothesis::H7),
            10 => Ok(Hypothesis::H10),
            15 => Ok(Hypothesis::H15),
            other => Err(format!("unknown hypothesis: {other} (expected 3, 5, 7, 10, or 15)")),
        }
    }
}

impl From<Hypothesis> for u8 {
    fn from(value: Hypothesis) -> Self {
        value.days()
    }
}

impl std::fmt::Display for Hypothesis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.days())
    }
}

impl std::str::FromStr for Hypothesis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u8 = s
            .parse()
            .map_err(|_| format!("invalid hypothesis: {s:?}"))?;
        Hypothesis::try_from(n)
    }
}

/// Lifecycle state of an agent within a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentState {
    Active,
    Waiting,
    Expelled,
}

impl AgentState {
    pub fn is_expelled(&self) -> bool {
        matches!(self, AgentState::Expelled)
    }
}

/// One fixed time window over which an agent's ROI is measured.
///
/// Periods are aligned by end date across agents sharing a hypothesis:
/// index `i` for two agents carries the same end date unless one of them
/// joined later and has fewer periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    /// 0-based position within the agent's period sequence.
    pub index: usize,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// ROI for this period, in percent units.
    pub roi: f64,
    pub starting_balance: f64,
    pub closed_pnl: f64,
    pub trade_count: u32,
}

/// A trading agent with its ordered sequence of ROI periods.
///
/// Owned by the fetched snapshot; immutable within a computation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub agent_id: String,
    pub user_id: String,
    pub symbol: String,
    pub state: AgentState,
    pub periods: Vec<Period>,
}

impl Agent {
    /// Largest absolute ROI magnitude across this agent's periods.
    ///
    /// Returns 0.0 for an agent with no periods.
    pub fn max_abs_roi(&self) -> f64 {
        self.periods
            .iter()
            .map(|p| p.roi.abs())
            .fold(0.0, f64::max)
    }
}
