//! Core types for result data representation.
//!
//! This module provides the plain data records produced by the IOF extractor and
//! annotated by the ranking engine.
//!
//! ## Architecture
//!
//! The types follow the shape of an IOF `ResultList`:
//! - [`EventInfo`] carries the event id, name and start time
//! - [`ClassResult`] is one category with its runners in document order
//! - [`RunnerResult`] is one competitor with status, legs and derived total time
//! - [`Leg`] is one split, with its leg time derived from cumulative punch times
//! - [`StatusCode`] classifies the outcome of a run and drives sort precedence
//!
//! ## Invariants
//!
//! - `RunnerResult::time_seconds` is the sum of `leg_seconds`, never a separate total
//! - `RunnerResult::overall_rank` is only ever `Some` for [`StatusCode::Ok`]
//!
//! ## Usage Example
//!
//! ```rust
//! use ofresults::types::{ClassResult, Leg, RunnerResult, StatusCode};
//!
//! let legs = vec![
//!     Leg { control_code: "31".into(), cumulative_seconds: 120, leg_seconds: 120, is_missing: false },
//!     Leg { control_code: "32".into(), cumulative_seconds: 300, leg_seconds: 180, is_missing: false },
//! ];
//! let runner = RunnerResult::new("Anne Martin", "COLE", "101", StatusCode::Ok, legs);
//! assert_eq!(runner.time_seconds, 300);
//!
//! let category = ClassResult::new("H21E", "1", vec![runner]);
//! assert_eq!(category.key(), "1");
//! ```

mod category;
mod runner;
mod status;

pub use category::{ClassResult, DEFAULT_CATEGORY_NAME, DEFAULT_EVENT_NAME, EventInfo};
pub use runner::{Leg, RunnerResult, UNKNOWN_CONTROL, UNNAMED_RUNNER, full_name, total_seconds};
pub use status::StatusCode;
