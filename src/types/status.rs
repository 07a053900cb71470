//! Competitor status codes

use serde::{Deserialize, Serialize};

/// Outcome classification of a runner's race, as reported by the IOF `Status` element.
///
/// Any value the crate does not recognise (including an absent or empty
/// status) is folded into [`StatusCode::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum StatusCode {
    /// Finished with a valid punch sequence
    #[serde(rename = "OK")]
    Ok,
    /// Missing or wrong punch
    MisPunch,
    Disqualified,
    DidNotFinish,
    DidNotStart,
    /// Unrecognised or absent status
    #[default]
    Unknown,
}

impl StatusCode {
    /// Parse an IOF status value. Matching is exact, as in the IOF schema.
    pub fn from_iof(value: &str) -> Self {
        match value {
            "OK" => StatusCode::Ok,
            "MisPunch" => StatusCode::MisPunch,
            "Disqualified" => StatusCode::Disqualified,
            "DidNotFinish" => StatusCode::DidNotFinish,
            "DidNotStart" => StatusCode::DidNotStart,
            _ => StatusCode::Unknown,
        }
    }

    /// Sort precedence: lower values are listed first.
    pub fn precedence(self) -> u8 {
        match self {
            StatusCode::Ok => 0,
            StatusCode::MisPunch => 1,
            StatusCode::Disqualified => 2,
            StatusCode::DidNotFinish => 3,
            StatusCode::DidNotStart => 4,
            StatusCode::Unknown => 99,
        }
    }

    /// Short label shown in result tables.
    pub fn label(self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::MisPunch => "PM",
            StatusCode::Disqualified => "DSQ",
            StatusCode::DidNotFinish => "DNF",
            StatusCode::DidNotStart => "DNS",
            StatusCode::Unknown => "Unknown",
        }
    }

    pub fn is_ok(self) -> bool {
        self == StatusCode::Ok
    }
}
