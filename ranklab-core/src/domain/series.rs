//! Plot-ready series — the engine's output to the rendering layer.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::agent::AgentState;

/// A single chart point: x is epoch milliseconds at UTC midnight, y is a
/// ROI value in percent units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: i64,
    pub y: f64,
}

impl PlotPoint {
    pub fn at(date: NaiveDate, y: f64) -> Self {
        Self {
            x: epoch_millis(date),
            y,
        }
    }
}

/// Epoch milliseconds for a calendar date at UTC midnight.
pub fn epoch_millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// Visual weight tier for a line, stepped down by canonical rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineWeight {
    /// Rank 1-5, and the general-aggregate curves.
    Heavy,
    /// Rank 6-10.
    Medium,
    /// Everyone else.
    Light,
}

impl LineWeight {
    pub fn stroke_width(&self) -> u32 {
        match self {
            LineWeight::Heavy => 4,
            LineWeight::Medium => 3,
            LineWeight::Light => 2,
        }
    }

    pub fn point_radius(&self) -> u32 {
        match self {
            LineWeight::Heavy => 5,
            LineWeight::Medium => 4,
            LineWeight::Light => 3,
        }
    }
}

/// One renderable line: ordered points plus display styling.
///
/// Rebuilt whenever the view mode, hypothesis, or date filter changes —
/// always a fresh structure, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSeries {
    /// Present for agent-scoped lines; the general-aggregate curves have none.
    pub agent_id: Option<String>,
    pub label: String,
    /// Stroke color as a `#rrggbb` hex string.
    pub color: String,
    pub weight: LineWeight,
    /// Canonical position of the agent behind this line, when agent-scoped.
    pub position: Option<u32>,
    pub state: Option<AgentState>,
    pub points: Vec<PlotPoint>,
}
