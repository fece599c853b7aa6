//! Stroke colors and line weights, assigned by canonical rank.
//!
//! Top-10 agents cycle through a fixed palette in rank order; agents below
//! the cut never consume a palette slot. Expelled agents always render in
//! the alert color, ahead of any rank-based choice.

use crate::domain::{AgentState, LineWeight};

/// Line colors for the ranked leaders, consumed in rank order.
pub const PALETTE: [&str; 20] = [
    "#FF6384", // strong pink
    "#36A2EB", // blue
    "#FFCE56", // yellow
    "#4BC0C0", // turquoise
    "#9966FF", // purple
    "#FF9F40", // orange
    "#FF6B9D", // light pink
    "#4ECDC4", // light turquoise
    "#45B7D1", // sky blue
    "#96CEB4", // mint green
    "#FFEAA7", // pastel yellow
    "#DFE6E9", // light gray
    "#74B9FF", // light blue
    "#A29BFE", // light purple
    "#FD79A8", // pastel pink
    "#FDCB6E", // mustard
    "#6C5CE7", // dark purple
    "#00B894", // green
    "#00CEC9", // cyan
    "#E17055", // dark orange
];

/// Expelled agents, regardless of rank.
pub const ALERT: &str = "#e74c3c";

/// Everyone outside the top 10.
pub const NEUTRAL: &str = "#95a5a6";

/// General-aggregate curves: gains, losses, net.
pub const GENERAL_GAIN: &str = "#00B894";
pub const GENERAL_LOSS: &str = "#e74c3c";
pub const GENERAL_NET: &str = "#3498db";

/// Stroke color for an agent line given its state and canonical position.
pub fn stroke_for(state: AgentState, position: Option<u32>) -> &'static str {
    if state.is_expelled() {
        return ALERT;
    }
    match position {
        Some(pos) if (1..=10).contains(&pos) => PALETTE[(pos as usize - 1) % PALETTE.len()],
        _ => NEUTRAL,
    }
}

/// Weight tier for a canonical position: 1-5 heavy, 6-10 medium, rest light.
pub fn weight_for(position: Option<u32>) -> LineWeight {
    match position {
        Some(pos) if (1..=5).contains(&pos) => LineWeight::Heavy,
        Some(pos) if (6..=10).contains(&pos) => LineWeight::Medium,
        _ => LineWeight::Light,
    }
}
