//! Wire DTOs for the backend's response contracts.
//!
//! Field names mirror the backend's camelCase JSON. The DTOs exist only at
//! the edge: everything is converted into `ranklab-core` domain types
//! before any ranking or series work happens, and the advisory `position`
//! fields the backend embeds are either dropped (period payloads) or kept
//! purely as `reported_position` (daily payloads) — never used for
//! ordering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ranklab_core::domain::{
    Agent, AgentDaily, AgentState, DailyRoi, GeneralDay, GeneralTopEntry, Hypothesis, Period,
};

/// ISO dates, tolerating a trailing time component (`2025-05-07T00:00:00Z`).
mod iso_date {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(de)?;
        let day = raw.split('T').next().unwrap_or(&raw);
        NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(serde::de::Error::custom)
    }
}

// ── Hypothesis ranking response ──────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponse {
    pub success: bool,
    pub hypothesis: Hypothesis,
    pub total_agents: usize,
    pub agents: Vec<AgentDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDto {
    pub agent_id: String,
    pub user_id: String,
    pub symbol: String,
    pub state: AgentState,
    /// Advisory; the canonical rank is recomputed downstream.
    #[serde(default)]
    pub position: Option<u32>,
    pub periods: Vec<PeriodDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodDto {
    pub index: usize,
    #[serde(with = "iso_date")]
    pub start_date: NaiveDate,
    #[serde(with = "iso_date")]
    pub end_date: NaiveDate,
    pub roi: f64,
    pub starting_balance: f64,
    pub closed_pnl: f64,
    pub trade_count: u32,
}

impl From<AgentDto> for Agent {
    fn from(dto: AgentDto) -> Self {
        Agent {
            agent_id: dto.agent_id,
            user_id: dto.user_id,
            symbol: dto.symbol,
            state: dto.state,
            periods: dto.periods.into_iter().map(Period::from).collect(),
        }
    }
}

impl From<PeriodDto> for Period {
    fn from(dto: PeriodDto) -> Self {
        Period {
            index: dto.index,
            start_date: dto.start_date,
            end_date: dto.end_date,
            roi: dto.roi,
            starting_balance: dto.starting_balance,
            closed_pnl: dto.closed_pnl,
            trade_count: dto.trade_count,
        }
    }
}

// ── Daily ROI response ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyResponse {
    pub success: bool,
    pub total_agents: usize,
    pub agents: Vec<AgentDailyDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDailyDto {
    pub agent_id: String,
    pub user_id: String,
    pub symbol: String,
    pub state: AgentState,
    #[serde(default)]
    pub position: Option<u32>,
    pub days: Vec<DailyRoiDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRoiDto {
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
    pub cumulative_roi: f64,
    pub daily_roi: f64,
    pub closed_pnl: f64,
    pub balance: f64,
}

impl From<AgentDailyDto> for AgentDaily {
    fn from(dto: AgentDailyDto) -> Self {
        AgentDaily {
            agent_id: dto.agent_id,
            user_id: dto.user_id,
            symbol: dto.symbol,
            state: dto.state,
            reported_position: dto.position.unwrap_or(0),
            days: dto
                .days
                .into_iter()
                .map(|d| DailyRoi {
                    date: d.date,
                    cumulative_roi: d.cumulative_roi,
                    daily_roi: d.daily_roi,
                    closed_pnl: d.closed_pnl,
                    balance: d.balance,
                })
                .collect(),
        }
    }
}

// ── General aggregate response ───────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralResponse {
    pub success: bool,
    pub hypothesis: Hypothesis,
    pub days: Vec<GeneralDayDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralDayDto {
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
    pub gain_cumulative: f64,
    pub loss_cumulative: f64,
    #[serde(default)]
    pub top10: Vec<GeneralTopEntryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralTopEntryDto {
    pub agent_id: String,
    pub user_id: String,
    pub symbol: String,
    pub position: u32,
    pub roi: f64,
}

impl From<GeneralDayDto> for GeneralDay {
    fn from(dto: GeneralDayDto) -> Self {
        GeneralDay {
            date: dto.date,
            gain_cumulative: dto.gain_cumulative,
            loss_cumulative: dto.loss_cumulative,
            top10: dto
                .top10
                .into_iter()
                .map(|e| GeneralTopEntry {
                    agent_id: e.agent_id,
                    user_id: e.user_id,
                    symbol: e.symbol,
                    position: e.position,
                    roi: e.roi,
                })
                .collect(),
        }
    }
}
