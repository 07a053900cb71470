//! Display-ready projections of ranked categories.
//!
//! A renderer consumes these values as they are: every label, formatted time
//! and highlight flag is decided here, so the rendering side performs no
//! computation of its own.

use serde::{Deserialize, Serialize};

use crate::ranking::{BestLegTimes, RankedCategory};
use crate::types::{RunnerResult, StatusCode};

/// Format seconds as `h:mm:ss`, or `m:ss` under one hour. Zero and negative values format as empty.
pub fn format_time(total_seconds: i64) -> String {
    if total_seconds <= 0 {
        return String::new();
    }
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

fn format_seconds(seconds: u64) -> String {
    format_time(i64::try_from(seconds).unwrap_or(i64::MAX))
}

/// Stable identity of a row, built from positions instead of random ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct RowKey {
    /// Category index in document order
    pub category: usize,
    /// Runner index within the category, in document order
    pub runner: usize,
}

impl RowKey {
    /// Element id for the row's split table.
    pub fn splits_id(&self) -> String {
        format!("splits-{}-{}", self.category, self.runner)
    }
}

/// One cell column of a runner's split table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct LegCell {
    /// 1-based position on the course
    pub order: usize,
    pub control_code: String,
    pub leg_time: String,
    pub cumulative_time: String,
    /// Fastest time of the category on this leg
    pub is_best: bool,
    pub is_missing: bool,
}

/// One runner line of a result table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct RunnerRow {
    pub key: RowKey,
    /// Overall rank, empty for runners without an `OK` status
    pub rank: String,
    pub bib: String,
    pub name: String,
    pub club: String,
    pub start_time: String,
    /// Total time, empty when zero
    pub time: String,
    pub status: StatusCode,
    pub status_label: String,
    pub is_ok: bool,
    pub legs: Vec<LegCell>,
}

impl RunnerRow {
    pub fn build(key: RowKey, runner: &RunnerResult, best: &BestLegTimes) -> Self {
        let legs = runner
            .legs
            .iter()
            .enumerate()
            .map(|(index, leg)| LegCell {
                order: index + 1,
                control_code: leg.control_code.clone(),
                leg_time: format_seconds(leg.leg_seconds),
                cumulative_time: format_time(leg.cumulative_seconds),
                is_best: best.is_best(index, leg.leg_seconds),
                is_missing: leg.is_missing,
            })
            .collect();

        Self {
            key,
            rank: runner.overall_rank.map(|r| r.to_string()).unwrap_or_default(),
            bib: runner.bib.clone(),
            name: runner.full_name.clone(),
            club: runner.club.clone(),
            start_time: runner.start_time.clone(),
            time: format_seconds(runner.time_seconds),
            status: runner.status,
            status_label: runner.status.label().to_string(),
            is_ok: runner.status.is_ok(),
            legs,
        }
    }

    pub fn has_splits(&self) -> bool {
        !self.legs.is_empty()
    }
}

/// One category block of the results display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct CategoryView {
    /// Category index in document order
    pub index: usize,
    pub name: String,
    pub id: String,
    pub label: String,
    /// Rows in display order
    pub rows: Vec<RunnerRow>,
}

impl CategoryView {
    /// Build the view of `ranked` showing the runners at `order` (document-order indices).
    pub fn build(index: usize, ranked: &RankedCategory, order: &[usize]) -> Self {
        let rows = order
            .iter()
            .map(|&runner| {
                RunnerRow::build(
                    RowKey { category: index, runner },
                    &ranked.runners[runner],
                    &ranked.best_leg_times,
                )
            })
            .collect();

        let label = if ranked.id.is_empty() {
            ranked.name.clone()
        } else {
            format!("{} ({})", ranked.name, ranked.id)
        };

        Self { index, name: ranked.name.clone(), id: ranked.id.clone(), label, rows }
    }

    /// Element id used to jump to this category.
    pub fn anchor(&self) -> String {
        format!("class-block-{}", self.index)
    }

    pub fn runner_count(&self) -> usize {
        self.rows.len()
    }
}
