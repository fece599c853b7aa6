//! Domain types: agents, periods, daily records, rankings, plot series.

mod agent;
mod daily;
mod ranking;
mod series;

pub use agent::{Agent, AgentState, Hypothesis, Period};
pub use daily::{AgentDaily, DailyRoi, GeneralDay, GeneralTopEntry};
pub use ranking::RankedAgent;
pub use series::{epoch_millis, LineWeight, PlotPoint, PlotSeries};
