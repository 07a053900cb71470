//! Best split time per leg

use serde::{Deserialize, Serialize};

use crate::types::RunnerResult;

/// Fastest positive leg time for each leg index of a category.
///
/// Legs are aligned by position, not by control code, so the table is only
/// meaningful when every runner of the category ran the same control sequence.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct BestLegTimes(Vec<Option<u64>>);

impl BestLegTimes {
    /// Best time at `index`, `None` when no runner has a positive time there.
    pub fn get(&self, index: usize) -> Option<u64> {
        self.0.get(index).copied().flatten()
    }

    /// Whether `leg_seconds` equals the best time at `index`.
    pub fn is_best(&self, index: usize, leg_seconds: u64) -> bool {
        self.get(index) == Some(leg_seconds)
    }

    /// Number of leg indices seen across the category.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Option<u64>] {
        &self.0
    }
}

/// Compute the best-leg table over every runner passed in.
///
/// Zero-length legs never count. Legs flagged missing still count when their
/// time is positive. Runners with fewer legs simply skip the indices they lack.
pub fn best_leg_times(runners: &[RunnerResult]) -> BestLegTimes {
    let mut best: Vec<Option<u64>> = Vec::new();

    for runner in runners {
        for (index, leg) in runner.legs.iter().enumerate() {
            if index >= best.len() {
                best.resize(index + 1, None);
            }
            if leg.leg_seconds == 0 {
                continue;
            }
            let slot = &mut best[index];
            if slot.is_none_or(|current| leg.leg_seconds < current) {
                *slot = Some(leg.leg_seconds);
            }
        }
    }

    // Trailing indices where nobody has a positive time carry no information.
    while matches!(best.last(), Some(None)) {
        best.pop();
    }

    BestLegTimes(best)
}
