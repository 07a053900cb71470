//! Result boards
//!
//! A board owns extracted result lists and turns them into display-ready
//! [`CategoryView`](crate::view::CategoryView)s. Two flavours exist:
//!
//! - [`ResultsBoard`]: the organiser's page. Imports several files, lets the
//!   user pick an event, filter by category and club, and produces the public
//!   link for the selected file.
//! - [`PublicBoard`]: the spectator page. Loads a single file by name and shows
//!   every category.
//!
//! Boards are plain owned values. Ranking is recomputed from the extracted
//! records on every render.

use serde::{Deserialize, Serialize};

mod admin;
mod public;

pub use admin::{LoadedEvent, ResultsBoard};
pub use public::PublicBoard;

/// Label shown in the event selector for events without an id.
pub const MISSING_EVENT_ID_LABEL: &str = "(sans ID)";

/// Selector value meaning "no restriction" in page markup.
pub const ALL_VALUE: &str = "__all__";

/// A selector restriction: everything, or one specific value.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum Filter {
    #[default]
    All,
    Only(String),
}

impl Filter {
    pub fn only(value: impl Into<String>) -> Self {
        Filter::Only(value.into())
    }

    /// Interpret a raw selector value; empty and `__all__` mean no restriction.
    pub fn from_selector(value: &str) -> Self {
        if value.is_empty() || value == ALL_VALUE { Filter::All } else { Filter::only(value) }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }
}

/// An entry of the event selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct EventOption {
    pub key: String,
    pub label: String,
}

/// An entry of a category selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct CategoryOption {
    /// Category index in document order
    pub index: usize,
    /// Filter key: class id, or the name when the id is empty
    pub key: String,
    /// Category name
    pub label: String,
    /// Class id, possibly empty
    pub meta: String,
}

impl CategoryOption {
    /// Text shown in a selector, `"name (id)"` when an id is present.
    pub fn display(&self) -> String {
        if self.meta.is_empty() { self.label.clone() } else { format!("{} ({})", self.label, self.meta) }
    }
}
