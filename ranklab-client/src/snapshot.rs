//! A complete dashboard snapshot: everything the engine needs for any view.
//!
//! The three backend feeds are independent, so [`fetch_snapshot`] fans out
//! over scoped threads and joins before returning. A snapshot serializes to
//! a single JSON document, which doubles as the offline input format for the
//! TUI and CLI.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::error::ClientError;
use ranklab_core::domain::{Agent, AgentDaily, GeneralDay, Hypothesis};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub hypothesis: Hypothesis,
    pub agents: Vec<Agent>,
    pub daily: Vec<AgentDaily>,
    pub general: Vec<GeneralDay>,
}

impl DashboardSnapshot {
    pub fn read_from(path: &Path) -> Result<Self, ClientError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn write_to(&self, path: &Path) -> Result<(), ClientError> {
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }
}

/// Fetch all three feeds for one hypothesis, in parallel, and join.
///
/// Each leg owns its own failure; the first error encountered (in feed
/// order) is the one reported. A panicked worker is surfaced as a contract
/// violation rather than poisoning the caller.
pub fn fetch_snapshot(
    client: &ApiClient,
    config: &ClientConfig,
) -> Result<DashboardSnapshot, ClientError> {
    let hypothesis = config.hypothesis;
    let range = config.date_range();

    let (agents, daily, general) = std::thread::scope(|scope| {
        let ranking_leg = scope.spawn(|| client.fetch_ranking(hypothesis, range));
        let daily_leg = scope.spawn(|| client.fetch_daily(hypothesis, range, range.is_some()));
        let general_leg = scope.spawn(|| client.fetch_general(hypothesis));

        let agents = join_leg(ranking_leg)?;
        let daily = join_leg(daily_leg)?;
        let general = join_leg(general_leg)?;
        Ok::<_, ClientError>((agents, daily, general))
    })?;

    Ok(DashboardSnapshot {
        hypothesis,
        agents,
        daily,
        general,
    })
}

fn join_leg<T>(
    handle: std::thread::ScopedJoinHandle<'_, Result<T, ClientError>>,
) -> Result<T, ClientError> {
    handle
        .join()
        .map_err(|_| ClientError::Contract("fetch worker panicked".into()))?
}
