//! Categories (IOF classes) and event metadata

use serde::{Deserialize, Serialize};

use super::RunnerResult;

/// Category name used when a `ClassResult` has no `Class` element.
pub const DEFAULT_CATEGORY_NAME: &str = "Catégorie";

/// Event name used when the `Event` element has no `Name`.
pub const DEFAULT_EVENT_NAME: &str = "Course d’orientation";

/// A competition category with its runners in document order.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct ClassResult {
    pub name: String,
    pub id: String,
    pub runners: Vec<RunnerResult>,
}

impl ClassResult {
    pub fn new(name: impl Into<String>, id: impl Into<String>, runners: Vec<RunnerResult>) -> Self {
        Self { name: name.into(), id: id.into(), runners }
    }

    /// Filter key: the class id, or the name when the id is empty.
    pub fn key(&self) -> &str {
        if self.id.is_empty() { &self.name } else { &self.id }
    }

    /// Selector label, `"name (id)"` when an id is present.
    pub fn label(&self) -> String {
        if self.id.is_empty() { self.name.clone() } else { format!("{} ({})", self.name, self.id) }
    }
}

/// Event metadata from the `Event` element.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct EventInfo {
    pub id: String,
    /// Raw event name, possibly empty
    pub name: String,
    /// Opaque start timestamp
    pub start_time: String,
    /// Date part of the start time
    pub date: String,
}

impl EventInfo {
    /// Event name, or the generic event label when the document has none.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() { DEFAULT_EVENT_NAME } else { &self.name }
    }

    /// Heading for the public page: `"date · id"`, or the event name when both are empty.
    pub fn title(&self) -> String {
        let parts: Vec<&str> =
            [self.date.as_str(), self.id.as_str()].into_iter().filter(|p| !p.is_empty()).collect();
        if parts.is_empty() { self.display_name().to_string() } else { parts.join(" · ") }
    }
}
