//! Deterministic sample data for demos and offline tests.
//!
//! Generates a field that exercises every interesting path the engine has:
//! a runaway agent with period ROIs beyond the plausibility limit, an
//! expelled agent, a late joiner with fewer periods, and an agent with no
//! closed periods at all. The same seed always yields the same snapshot.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::snapshot::DashboardSnapshot;
use ranklab_core::domain::{
    Agent, AgentDaily, AgentState, DailyRoi, GeneralDay, GeneralTopEntry, Hypothesis, Period,
};
use ranklab_core::engine::{latest_end_date, rank, RankSnapshot};

const AGENT_COUNT: usize = 14;
const PERIOD_COUNT: usize = 6;
const STARTING_BALANCE: f64 = 1000.0;

const SYMBOLS: &[&str] = &[
    "BTCUSDT", "ETHUSDT", "SOLUSDT", "XRPUSDT", "DOGEUSDT", "ADAUSDT", "LINKUSDT",
];

// Fixed roles within the field, by agent index.
const RUNAWAY: usize = 9;
const EXPELLED: usize = 10;
const LATE_JOINER: usize = 11;
const NO_PERIODS: usize = 12;

/// Build a full snapshot from a seed. Same seed, same data.
pub fn sample_snapshot(seed: u64) -> DashboardSnapshot {
    let mut rng = StdRng::seed_from_u64(seed);
    let hypothesis = Hypothesis::H5;
    let first_start = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap_or_default();
    let slot = Duration::days(hypothesis.days() as i64);

    let agents = build_agents(&mut rng, first_start, slot);
    let ranks = RankSnapshot::at_latest(&agents);
    let daily = build_daily(&mut rng, &agents, &ranks);
    let general = build_general(&mut rng, &agents, first_start, slot);

    DashboardSnapshot {
        hypothesis,
        agents,
        daily,
        general,
    }
}

fn build_agents(rng: &mut StdRng, first_start: NaiveDate, slot: Duration) -> Vec<Agent> {
    (0..AGENT_COUNT)
        .map(|i| {
            let (first_slot, slots) = match i {
                NO_PERIODS => (0, 0),
                LATE_JOINER => (PERIOD_COUNT - 2, 2),
                _ => (0, PERIOD_COUNT),
            };

            let periods = (first_slot..first_slot + slots)
                .map(|slot_idx| {
                    let start_date = first_start + slot * slot_idx as i32;
                    let roi = if i == RUNAWAY {
                        // One wild leg per period, well past the plausibility limit.
                        rng.gen_range(1100.0..2500.0) * if rng.gen_bool(0.5) { 1.0 } else { -1.0 }
                    } else {
                        rng.gen_range(-12.0..12.0)
                    };
                    Period {
                        index: slot_idx,
                        start_date,
                        end_date: start_date + slot - Duration::days(1),
                        roi,
                        starting_balance: STARTING_BALANCE,
                        closed_pnl: roi / 100.0 * STARTING_BALANCE,
                        trade_count: rng.gen_range(1..30),
                    }
                })
                .collect();

            Agent {
                agent_id: format!("agent-{i:02}"),
                user_id: format!("futures-{}", (b'A' + i as u8) as char),
                symbol: SYMBOLS[i % SYMBOLS.len()].to_string(),
                state: if i == EXPELLED {
                    AgentState::Expelled
                } else {
                    AgentState::Active
                },
                periods,
            }
        })
        .collect()
}

fn build_daily(rng: &mut StdRng, agents: &[Agent], ranks: &RankSnapshot) -> Vec<AgentDaily> {
    agents
        .iter()
        .filter(|agent| !agent.periods.is_empty())
        .map(|agent| {
            let first = agent.periods[0].start_date;
            let last = agent.periods[agent.periods.len() - 1].end_date;

            let mut cumulative = 0.0;
            let mut days = Vec::new();
            let mut date = first;
            while date <= last {
                let swing = if agent.agent_id == format!("agent-{RUNAWAY:02}") {
                    rng.gen_range(-400.0..400.0)
                } else {
                    rng.gen_range(-3.0..3.0)
                };
                cumulative += swing;
                days.push(DailyRoi {
                    date,
                    cumulative_roi: cumulative,
                    daily_roi: swing,
                    closed_pnl: swing / 100.0 * STARTING_BALANCE,
                    balance: STARTING_BALANCE * (1.0 + cumulative / 100.0),
                });
                date += Duration::days(1);
            }

            AgentDaily {
                agent_id: agent.agent_id.clone(),
                user_id: agent.user_id.clone(),
                symbol: agent.symbol.clone(),
                state: agent.state,
                reported_position: ranks.position_of(&agent.agent_id).unwrap_or(0),
                days,
            }
        })
        .collect()
}

fn build_general(
    rng: &mut StdRng,
    agents: &[Agent],
    first_start: NaiveDate,
    slot: Duration,
) -> Vec<GeneralDay> {
    let last = match latest_end_date(agents) {
        Some(end) => end,
        None => first_start + slot * PERIOD_COUNT as i32,
    };

    let mut gains = 0.0;
    let mut losses = 0.0;
    let mut days = Vec::new();
    let mut date = first_start;
    while date <= last {
        gains += rng.gen_range(0.0..25.0);
        losses -= rng.gen_range(0.0..20.0);
        days.push(GeneralDay {
            date,
            gain_cumulative: gains,
            loss_cumulative: losses,
            top10: top_entries(agents, date),
        });
        date += Duration::days(1);
    }
    days
}

// The feed embeds each day's leaderboard; derive it with the same ordering
// rule the engine uses so the sample is internally consistent.
fn top_entries(agents: &[Agent], date: NaiveDate) -> Vec<GeneralTopEntry> {
    rank(agents, date)
        .into_iter()
        .take(10)
        .map(|r| GeneralTopEntry {
            agent_id: r.agent_id,
            user_id: r.user_id,
            symbol: r.symbol,
            position: r.position,
            roi: r.roi,
        })
        .collect()
}
