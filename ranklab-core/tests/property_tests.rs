//! Property tests for engine invariants.
//!
//! Uses proptest to verify:
//! 1. Positions are a dense permutation 1..=N for any non-empty snapshot
//! 2. Ranking is stable — equal ROIs keep input order
//! 3. Ranked leaders survive outlier classification regardless of magnitude
//! 4. Extreme non-leaders are always excluded
//! 5. The general net curve is the pointwise sum of its components
//! 6. Top-K extraction is a prefix of the full ranking
//! 7. The full pipeline is idempotent

use proptest::prelude::*;

use chrono::NaiveDate;
use ranklab_core::domain::{Agent, AgentState, GeneralDay, Period};
use ranklab_core::engine::outlier::{classify_periods, PROTECTED_RANKS, ROI_MAGNITUDE_LIMIT};
use ranklab_core::engine::{
    build_general_series, build_period_view, rank, top_k_at, RankSnapshot, ReferenceKey,
};
use ranklab_core::fingerprint::series_digest;

// ── Strategies (proptest) ────────────────────────────────────────────

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 5).expect("valid date")
}

fn slot_end(slot: usize) -> NaiveDate {
    base_date() + chrono::Duration::days(5 * slot as i64)
}

/// Build an agent whose period at slot `i` carries `rois[i]`, with end
/// dates aligned across all agents.
fn make_agent(idx: usize, rois: &[f64]) -> Agent {
    Agent {
        agent_id: format!("a{idx}"),
        user_id: format!("futures-a{idx}"),
        symbol: "BTCUSDT".into(),
        state: AgentState::Active,
        periods: rois
            .iter()
            .enumerate()
            .map(|(i, &roi)| Period {
                index: i,
                start_date: slot_end(i) - chrono::Duration::days(4),
                end_date: slot_end(i),
                roi,
                starting_balance: 1000.0,
                closed_pnl: roi * 10.0,
                trade_count: 1,
            })
            .collect(),
    }
}

fn arb_roi() -> impl Strategy<Value = f64> {
    (-2000.0..2000.0_f64).prop_map(|r| (r * 100.0).round() / 100.0)
}

/// A field of agents with 0..=4 aligned periods each.
fn arb_agents() -> impl Strategy<Value = Vec<Agent>> {
    prop::collection::vec(prop::collection::vec(arb_roi(), 0..=4), 1..25).prop_map(|rois| {
        rois.iter()
            .enumerate()
            .map(|(i, r)| make_agent(i, r))
            .collect()
    })
}

/// Small integer ROIs force plenty of ties.
fn arb_tied_agents() -> impl Strategy<Value = Vec<Agent>> {
    prop::collection::vec(-3..=3i32, 2..20).prop_map(|rois| {
        rois.iter()
            .enumerate()
            .map(|(i, &r)| make_agent(i, &[r as f64]))
            .collect()
    })
}

fn arb_general_days() -> impl Strategy<Value = Vec<GeneralDay>> {
    prop::collection::vec((0.0..500.0_f64, -500.0..0.0_f64), 0..30).prop_map(|pairs| {
        pairs
            .iter()
            .enumerate()
            .map(|(i, &(gain, loss))| GeneralDay {
                date: slot_end(i),
                gain_cumulative: gain,
                loss_cumulative: loss,
                top10: vec![],
            })
            .collect()
    })
}

// ── 1. Dense positions ───────────────────────────────────────────────

proptest! {
    /// Positions of a full ranking are exactly the set {1..N}.
    #[test]
    fn positions_are_dense_permutation(agents in arb_agents()) {
        let ranking = rank(&agents, slot_end(0));
        let mut positions: Vec<u32> = ranking.iter().map(|r| r.position).collect();
        positions.sort_unstable();
        let expected: Vec<u32> = (1..=agents.len() as u32).collect();
        prop_assert_eq!(positions, expected);
    }

    /// The same holds for any slot, including slots some agents lack.
    #[test]
    fn positions_dense_at_every_slot(agents in arb_agents(), slot in 0..4usize) {
        let ranking = rank(&agents, slot_end(slot));
        let mut positions: Vec<u32> = ranking.iter().map(|r| r.position).collect();
        positions.sort_unstable();
        let expected: Vec<u32> = (1..=agents.len() as u32).collect();
        prop_assert_eq!(positions, expected);
    }
}

// ── 2. Stability ─────────────────────────────────────────────────────

proptest! {
    /// Among equal-ROI agents the earlier input index gets the lower
    /// position, and the ordering is globally descending.
    #[test]
    fn ranking_is_stable_under_ties(agents in arb_tied_agents()) {
        let ranking = rank(&agents, slot_end(0));
        for pair in ranking.windows(2) {
            prop_assert!(pair[0].roi >= pair[1].roi);
            if pair[0].roi == pair[1].roi {
                let first: usize = pair[0].agent_id[1..].parse().expect("index suffix");
                let second: usize = pair[1].agent_id[1..].parse().expect("index suffix");
                prop_assert!(first < second, "tie broke input order: a{} before a{}", first, second);
            }
        }
    }
}

// ── 3 & 4. Outlier exemption ─────────────────────────────────────────

proptest! {
    /// A top-10 agent with at least one period is always included, and an
    /// extreme agent outside the top 10 is always excluded.
    #[test]
    fn leaders_survive_and_extremes_outside_top10_drop(agents in arb_agents()) {
        let snapshot = RankSnapshot::at_latest(&agents);
        let classified = classify_periods(&agents, &snapshot);

        for agent in &agents {
            let included = classified
                .included
                .iter()
                .any(|a| a.agent_id == agent.agent_id);

            if agent.periods.is_empty() {
                prop_assert!(!included, "{} has no periods", agent.agent_id);
            } else if snapshot.is_top(&agent.agent_id, PROTECTED_RANKS) {
                prop_assert!(included, "leader {} was filtered", agent.agent_id);
            } else if agent.max_abs_roi() > ROI_MAGNITUDE_LIMIT {
                prop_assert!(!included, "extreme {} slipped through", agent.agent_id);
            } else {
                prop_assert!(included);
            }
        }
    }
}

// ── 5. General aggregate identity ────────────────────────────────────

proptest! {
    /// net[day] == positive[day] + negative[day] at every timestamp.
    #[test]
    fn net_curve_is_pointwise_component_sum(days in arb_general_days()) {
        let series = build_general_series(&days);
        prop_assert_eq!(series.len(), 3);
        let (gains, losses, net) = (&series[0], &series[1], &series[2]);
        for i in 0..days.len() {
            prop_assert_eq!(net.points[i].x, gains.points[i].x);
            prop_assert_eq!(net.points[i].y, gains.points[i].y + losses.points[i].y);
        }
    }
}

// ── 6. Top-K consistency ─────────────────────────────────────────────

proptest! {
    /// top_k_at(.., refDate, 10) equals rank(.., refDate) truncated to 10,
    /// for both reference key kinds.
    #[test]
    fn top_k_is_prefix_of_full_ranking(agents in arb_agents(), slot in 0..4usize) {
        let by_date = top_k_at(&agents, ReferenceKey::EndDate(slot_end(slot)), 10);
        let full = rank(&agents, slot_end(slot));
        let k = by_date.len();
        prop_assert_eq!(k, full.len().min(10));
        prop_assert_eq!(&full[..k], &by_date[..]);

        let by_index = top_k_at(&agents, ReferenceKey::PeriodIndex(slot), 10);
        prop_assert_eq!(by_date, by_index);
    }
}

// ── 7. Idempotence ───────────────────────────────────────────────────

proptest! {
    /// Two runs over the same snapshot and parameters produce identical
    /// output series and identical leaderboards.
    #[test]
    fn pipeline_is_idempotent(agents in arb_agents(), cumulative in any::<bool>()) {
        let first = build_period_view(&agents, cumulative);
        let second = build_period_view(&agents, cumulative);

        prop_assert_eq!(series_digest(&first.series), series_digest(&second.series));
        prop_assert_eq!(first.leaderboard, second.leaderboard);
        prop_assert_eq!(first.selection, second.selection);
    }
}
