//! Ranking & split engine.
//!
//! Takes one category's runner records and produces overall ranks, the
//! best-leg table and display ordering. Everything here is pure and
//! synchronous: the same input always yields the same output, and there is no
//! failure path.
//!
//! ## Ordering
//!
//! [`compare_runners`] is a total order used both for ranking and for display:
//!
//! 1. status precedence (`OK` < `MisPunch` < `Disqualified` < `DidNotFinish` <
//!    `DidNotStart` < unknown)
//! 2. for two `OK` runners, ascending total time, where a zero time sorts after
//!    every positive time
//! 3. ascending bib, compared as text (`"12"` before `"5"`)
//!
//! ## Ranks vs. display
//!
//! Ranks are assigned once over the whole category. Display filters (by club)
//! only choose and reorder rows; a runner keeps the rank earned against the
//! full field.
//!
//! ```rust
//! use ofresults::ranking::rank_category;
//! use ofresults::types::{ClassResult, Leg, RunnerResult, StatusCode};
//!
//! let leg = |s: u64| Leg { control_code: "31".into(), cumulative_seconds: s as i64, leg_seconds: s, is_missing: false };
//! let category = ClassResult::new("H21", "1", vec![
//!     RunnerResult::new("Slow", "COLE", "1", StatusCode::Ok, vec![leg(3660)]),
//!     RunnerResult::new("Fast", "ASO", "2", StatusCode::Ok, vec![leg(3600)]),
//!     RunnerResult::new("Out", "COLE", "3", StatusCode::DidNotFinish, vec![leg(900)]),
//! ]);
//!
//! let ranked = rank_category(&category);
//! let cole: Vec<_> = ranked.display_where(|r| r.club == "COLE");
//! assert_eq!(cole[0].full_name, "Slow");
//! assert_eq!(cole[0].overall_rank, Some(2));
//! assert_eq!(cole[1].overall_rank, None);
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::types::{ClassResult, RunnerResult};

mod best_legs;

pub use best_legs::{BestLegTimes, best_leg_times};

/// Total order over runners used for both ranking and display.
pub fn compare_runners(a: &RunnerResult, b: &RunnerResult) -> Ordering {
    a.status
        .precedence()
        .cmp(&b.status.precedence())
        .then_with(|| {
            if a.status.is_ok() && b.status.is_ok() {
                time_key(a).cmp(&time_key(b))
            } else {
                Ordering::Equal
            }
        })
        .then_with(|| a.bib.cmp(&b.bib))
}

/// A zero total time sorts after every positive time.
fn time_key(runner: &RunnerResult) -> (bool, u64) {
    (runner.time_seconds == 0, runner.time_seconds)
}

/// Indices of `runners` in ranking order. The sort is stable, so runners that
/// compare equal keep document order.
pub fn ranking_order(runners: &[RunnerResult]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..runners.len()).collect();
    order.sort_by(|&a, &b| compare_runners(&runners[a], &runners[b]));
    order
}

/// Overall rank of each runner, index-aligned with `runners`.
///
/// Ranks run `1..=k` over the `OK` runners in ranking order; other runners
/// get `None` and do not consume a number.
pub fn overall_ranks(runners: &[RunnerResult]) -> Vec<Option<u32>> {
    let mut ranks = vec![None; runners.len()];
    let mut next = 1u32;
    for index in ranking_order(runners) {
        if runners[index].status.is_ok() {
            ranks[index] = Some(next);
            next += 1;
        }
    }
    ranks
}

/// Write overall ranks into the runners, replacing any previous value.
pub fn assign_overall_ranks(runners: &mut [RunnerResult]) {
    let ranks = overall_ranks(runners);
    for (runner, rank) in runners.iter_mut().zip(ranks) {
        runner.overall_rank = rank;
    }
}

/// Sort any subset of runners into display order.
pub fn sort_for_display<'a, I>(runners: I) -> Vec<&'a RunnerResult>
where
    I: IntoIterator<Item = &'a RunnerResult>,
{
    let mut sorted: Vec<&RunnerResult> = runners.into_iter().collect();
    sorted.sort_by(|a, b| compare_runners(a, b));
    sorted
}

/// A category after a full ranking pass.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct RankedCategory {
    pub name: String,
    pub id: String,
    /// Runners in document order, each carrying its overall rank
    pub runners: Vec<RunnerResult>,
    /// Best leg times over the full, unfiltered category
    pub best_leg_times: BestLegTimes,
}

impl RankedCategory {
    /// Runners in display order, all of them.
    pub fn display(&self) -> Vec<&RunnerResult> {
        sort_for_display(&self.runners)
    }

    /// Runners matching `keep`, in display order. Ranks are untouched.
    pub fn display_where<F>(&self, keep: F) -> Vec<&RunnerResult>
    where
        F: Fn(&RunnerResult) -> bool,
    {
        self.display_order_where(keep).into_iter().map(|i| &self.runners[i]).collect()
    }

    /// Document-order indices of the runners matching `keep`, in display order.
    pub fn display_order_where<F>(&self, keep: F) -> Vec<usize>
    where
        F: Fn(&RunnerResult) -> bool,
    {
        let mut order: Vec<usize> =
            (0..self.runners.len()).filter(|&i| keep(&self.runners[i])).collect();
        order.sort_by(|&a, &b| compare_runners(&self.runners[a], &self.runners[b]));
        order
    }

    /// Number of runners with an `OK` status.
    pub fn ranked_count(&self) -> usize {
        self.runners.iter().filter(|r| r.overall_rank.is_some()).count()
    }
}

/// Rank a whole category: overall ranks plus the best-leg table.
///
/// The input is not modified; ranks are computed on a fresh copy so repeated
/// calls always start from the extracted records.
pub fn rank_category(category: &ClassResult) -> RankedCategory {
    let mut runners = category.runners.clone();
    assign_overall_ranks(&mut runners);
    let best_leg_times = best_leg_times(&runners);

    RankedCategory { name: category.name.clone(), id: category.id.clone(), runners, best_leg_times }
}
