//! Content digests for derived series.
//!
//! A digest over the canonical JSON form of a series collection gives a
//! cheap equality witness: two recomputations over the same snapshot and
//! parameters must produce the same digest. Also used to label exported
//! artifacts.

use crate::domain::PlotSeries;

/// Blake3 hex digest of the canonical JSON serialization of the series.
///
/// Returns a fixed digest of the empty list when serialization of any
/// point fails (non-finite floats are the only way that happens, and the
/// engine never produces them from finite input).
pub fn series_digest(series: &[PlotSeries]) -> String {
    let json = serde_json::to_string(series).unwrap_or_else(|_| "[]".to_string());
    blake3::hash(json.as_bytes()).to_hex().to_string()
}
