//! RankLab Core — ranking and chart-series derivation for agent ROI data.
//!
//! Given a fetched snapshot of per-agent, per-period ROI records, this
//! crate:
//! - computes the canonical top-N ranking for any reference period,
//!   independent of any position stored upstream
//! - classifies statistical outliers without ever excluding ranked leaders
//! - assigns stable draw colors and visual weights by rank tier
//! - derives three mutually consistent chart-ready time series views
//!   (per-hypothesis-period, per-calendar-day, and an aggregated gains vs.
//!   losses split) from one source ranking
//!
//! Everything here is a pure, synchronous transform over resident
//! collections: no I/O, no lifecycle state, no panics on any input. Empty
//! or partially missing data degrades to empty results or flat-ROI
//! defaults, so callers only ever branch on "is the result empty."

pub mod domain;
pub mod engine;
pub mod fingerprint;
