//! The ranking & chart-series derivation engine.
//!
//! Data flow: raw agent/period snapshot → [`period_index`] →
//! [`rank`] (canonical positions) → [`outlier`] (drop/retain series) →
//! [`series`] (plot-ready lines + styling), with [`topk`] answering
//! on-demand point-in-time queries under the same ranking rule and
//! [`pipeline`] wiring one full recomputation per view.

pub mod outlier;
pub mod palette;
pub mod period_index;
pub mod pipeline;
pub mod rank;
pub mod series;
pub mod topk;

pub use outlier::{classify_daily, classify_periods, Classification, RoiSpread};
pub use period_index::{latest_end_date, PeriodIndex};
pub use pipeline::{
    build_daily_view, build_general_view, build_period_view, leaderboard_at, ChartModel,
    LEADERBOARD_SIZE,
};
pub use rank::{rank, rank_by_period_index, RankSnapshot};
pub use series::{build_daily_series, build_general_series, build_period_series, ViewMode};
pub use topk::{general_entries_as_ranked, general_top_at, top_k_at, ReferenceKey};
