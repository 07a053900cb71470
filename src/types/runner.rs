//! Runner and leg records

use serde::{Deserialize, Serialize};

use super::StatusCode;

/// Name used when a competitor has neither a given nor a family name.
pub const UNNAMED_RUNNER: &str = "(Sans nom)";

/// Control code used when a split carries no `ControlCode`.
pub const UNKNOWN_CONTROL: &str = "?";

/// One timed segment of a runner's course, ending at a control.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct Leg {
    /// Code of the control closing this leg
    pub control_code: String,
    /// Elapsed time at this control, straight from the source `Time` field
    pub cumulative_seconds: i64,
    /// Time since the previous control; 0 when the cumulative time did not increase
    pub leg_seconds: u64,
    /// The punch for this control is flagged `Missing`
    pub is_missing: bool,
}

/// One competitor entry in a category.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct RunnerResult {
    pub full_name: String,
    pub club: String,
    pub bib: String,
    /// Opaque start timestamp, display only
    pub start_time: String,
    pub status: StatusCode,
    pub legs: Vec<Leg>,
    /// Sum of all `legs[].leg_seconds`
    pub time_seconds: u64,
    /// Rank within the whole category, `Some` only for [`StatusCode::Ok`]
    pub overall_rank: Option<u32>,
}

impl RunnerResult {
    /// Build a runner record; `time_seconds` is derived from `legs` and the rank is left unset.
    pub fn new(
        full_name: impl Into<String>,
        club: impl Into<String>,
        bib: impl Into<String>,
        status: StatusCode,
        legs: Vec<Leg>,
    ) -> Self {
        let time_seconds = total_seconds(&legs);
        Self {
            full_name: full_name.into(),
            club: club.into(),
            bib: bib.into(),
            start_time: String::new(),
            status,
            legs,
            time_seconds,
            overall_rank: None,
        }
    }

    pub fn with_start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = start_time.into();
        self
    }

    pub fn has_legs(&self) -> bool {
        !self.legs.is_empty()
    }
}

/// Join given and family names the way result tables show them.
pub fn full_name(given: &str, family: &str) -> String {
    let joined = format!("{} {}", given, family);
    let trimmed = joined.trim();
    if trimmed.is_empty() { UNNAMED_RUNNER.to_string() } else { trimmed.to_string() }
}

/// Total race time as the sum of leg times, saturating at `u64::MAX`.
pub fn total_seconds(legs: &[Leg]) -> u64 {
    legs.iter().fold(0u64, |total, leg| total.saturating_add(leg.leg_seconds))
}
