//! # IOF Result List Parsing
//!
//! This module reads IOF XML `ResultList` documents into plain runner records.
//! It performs no ranking: the output keeps every category and every runner in
//! document order, ready for the [`ranking`](crate::ranking) engine.
//!
//! ## Key Features
//!
//! - **Namespace tolerant**: IOF 3.0 documents with a default namespace and
//!   bare documents are read the same way
//! - **Lenient**: every missing optional element becomes an empty string or `0`;
//!   only a document that is not well-formed XML is rejected
//! - **Leg derivation**: per-leg times are derived from cumulative punch times,
//!   with non-increasing punches turned into zero-length legs
//!
//! ## Document Shape
//!
//! ```text
//! ResultList
//! ├── Event { Id, Name, StartTime }
//! └── ClassResult*
//!     ├── Class { Id, Name }
//!     └── PersonResult*
//!         ├── Person { Name { Given, Family } }
//!         ├── Organisation { Name }
//!         └── Result { BibNumber, StartTime, Status,
//!                      SplitTime* { ControlCode, Time, Status } }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use ofresults::ResultList;
//!
//! let xml = r#"<ResultList>
//!   <Event><Id>42</Id><Name>Sprint</Name></Event>
//!   <ClassResult>
//!     <Class><Id>1</Id><Name>H21</Name></Class>
//!     <PersonResult>
//!       <Person><Name><Given>Anne</Given><Family>Martin</Family></Name></Person>
//!       <Result>
//!         <Status>OK</Status>
//!         <SplitTime><ControlCode>31</ControlCode><Time>120</Time></SplitTime>
//!       </Result>
//!     </PersonResult>
//!   </ClassResult>
//! </ResultList>"#;
//!
//! let list = ResultList::parse(xml)?;
//! assert_eq!(list.categories[0].runners[0].full_name, "Anne Martin");
//! assert_eq!(list.categories[0].runners[0].time_seconds, 120);
//! # Ok::<(), ofresults::ResultsError>(())
//! ```

use std::path::Path;

use roxmltree::Document;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{ClassResult, EventInfo};
use crate::xml_utils::decode_result_xml;
use crate::{Result, ResultsError};

pub mod extract;

pub use extract::{
    MISSING_PUNCH_STATUS, SplitPunch, derive_legs, extract_categories, extract_category,
    extract_event, extract_runner,
};

/// Everything extracted from one result-list document.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct ResultList {
    /// Event metadata, absent when the document has no `Event` element
    pub event: Option<EventInfo>,
    /// Categories in document order; empty is a valid result
    pub categories: Vec<ClassResult>,
}

impl ResultList {
    /// Parse XML text into a result list.
    pub fn parse(xml: &str) -> Result<Self> {
        let doc = Document::parse(xml)
            .map_err(|e| ResultsError::xml_error("ResultList parsing", e.to_string()))?;
        Ok(Self::from_document(&doc))
    }

    /// Parse raw file bytes, tolerating a UTF-8 byte order mark.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let xml = decode_result_xml(data)?;
        Self::parse(&xml)
    }

    /// Extract a result list from an already parsed tree. Never fails.
    pub fn from_document(doc: &Document<'_>) -> Self {
        Self { event: extract_event(doc), categories: extract_categories(doc) }
    }

    /// Read and parse a result file.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading result file");

        let data = tokio::fs::read(path)
            .await
            .map_err(|e| ResultsError::file_error(path.to_path_buf(), e))?;
        Self::from_bytes(&data)
    }

    /// Names of all clubs, de-duplicated, empty names excluded.
    ///
    /// Sorted ignoring case and accents, so `"Étoile"` lands among the `e`s;
    /// names with the same folded key keep a byte-wise order.
    pub fn clubs(&self) -> Vec<String> {
        let mut clubs: Vec<String> = self
            .categories
            .iter()
            .flat_map(|c| c.runners.iter())
            .filter(|r| !r.club.is_empty())
            .map(|r| r.club.clone())
            .collect();
        clubs.sort_by_cached_key(|club| (collation_key(club), club.clone()));
        clubs.dedup();
        clubs
    }

    /// The event, or [`ResultsError::NoEvent`] naming `file_name`.
    pub fn require_event(&self, file_name: &str) -> Result<&EventInfo> {
        self.event.as_ref().ok_or_else(|| ResultsError::NoEvent { file_name: file_name.to_string() })
    }

    /// True when the document holds no category at all.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Lowercased name with common Latin accents removed.
fn collation_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name.chars().flat_map(char::to_lowercase) {
        match c {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => key.push('a'),
            'æ' => key.push_str("ae"),
            'ç' => key.push('c'),
            'è' | 'é' | 'ê' | 'ë' => key.push('e'),
            'ì' | 'í' | 'î' | 'ï' => key.push('i'),
            'ñ' => key.push('n'),
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => key.push('o'),
            'œ' => key.push_str("oe"),
            'ù' | 'ú' | 'û' | 'ü' => key.push('u'),
            'ý' | 'ÿ' => key.push('y'),
            other => key.push(other),
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ResultListBuilder, RunnerSpec};

    #[test]
    fn parse_rejects_malformed_xml() {
        let err = ResultList::parse("<ResultList><Event>").unwrap_err();
        assert!(matches!(err, ResultsError::Xml { .. }));
    }

    #[test]
    fn document_without_categories_is_empty_not_an_error() {
        let list = ResultList::parse("<ResultList><Event><Name>Sprint</Name></Event></ResultList>")
            .unwrap();
        assert!(list.is_empty());
        assert_eq!(list.require_event("a.xml").unwrap().name, "Sprint");
    }

    #[test]
    fn require_event_names_the_file() {
        let list = ResultList::parse("<ResultList><ClassResult/></ResultList>").unwrap();
        let err = list.require_event("start_list.xml").unwrap_err();
        assert!(matches!(err, ResultsError::NoEvent { ref file_name } if file_name == "start_list.xml"));
    }

    #[test]
    fn from_bytes_handles_bom() {
        let xml = ResultListBuilder::new("E1", "Sprint")
            .category("1", "H21", vec![RunnerSpec::ok("1", "COLE", &[100])])
            .build();
        let mut data = b"\xEF\xBB\xBF".to_vec();
        data.extend_from_slice(xml.as_bytes());

        let list = ResultList::from_bytes(&data).unwrap();
        assert_eq!(list.categories.len(), 1);
    }

    #[test]
    fn clubs_are_sorted_and_unique() {
        let xml = ResultListBuilder::new("E1", "Sprint")
            .category(
                "1",
                "H21",
                vec![
                    RunnerSpec::ok("1", "VHS", &[100]),
                    RunnerSpec::ok("2", "COLE", &[100]),
                    RunnerSpec::ok("3", "", &[100]),
                ],
            )
            .category("2", "D21", vec![RunnerSpec::ok("4", "COLE", &[100])])
            .build();

        let list = ResultList::parse(&xml).unwrap();
        assert_eq!(list.clubs(), vec!["COLE", "VHS"]);
    }

    #[test]
    fn clubs_sort_ignoring_case_and_accents() {
        let xml = ResultListBuilder::new("E1", "Sprint")
            .category(
                "1",
                "H21",
                vec![
                    RunnerSpec::ok("1", "Zurich OK", &[100]),
                    RunnerSpec::ok("2", "Étoile de Sens", &[100]),
                    RunnerSpec::ok("3", "ASO", &[100]),
                    RunnerSpec::ok("4", "cole", &[100]),
                    RunnerSpec::ok("5", "Étoile de Sens", &[100]),
                    RunnerSpec::ok("6", "Etoile", &[100]),
                ],
            )
            .build();

        let list = ResultList::parse(&xml).unwrap();
        assert_eq!(list.clubs(), vec!["ASO", "cole", "Etoile", "Étoile de Sens", "Zurich OK"]);
    }

    #[test]
    fn collation_key_folds_accents() {
        assert_eq!(collation_key("Étoile"), "etoile");
        assert_eq!(collation_key("CŒUR"), "coeur");
        assert_eq!(collation_key("Ñandú"), "nandu");
    }
}
