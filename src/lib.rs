//! Orienteering results from IOF XML result lists.
//!
//! ofresults reads IOF `ResultList` documents as published by timing software,
//! derives per-leg split times, ranks every category and produces display-ready
//! tables for a results wall or an organiser page.
//!
//! # Features
//!
//! - **Extraction**: tolerant IOF XML reading; missing fields default instead of failing
//! - **Ranking**: status precedence, time, then bib; best legs per position
//! - **Presentation**: formatted times, rank labels and highlight flags, ready to render
//! - **Boards**: multi-file organiser board with filters, single-file public board
//!
//! # Quick Start
//!
//! ```rust
//! use ofresults::{ResultList, ranking::rank_category, view::CategoryView};
//!
//! let xml = r#"<ResultList>
//!   <Event><Id>E1</Id><Name>Sprint</Name></Event>
//!   <ClassResult>
//!     <Class><Id>1</Id><Name>H21</Name></Class>
//!     <PersonResult>
//!       <Person><Name><Family>Martin</Family><Given>Anne</Given></Name></Person>
//!       <Result><BibNumber>101</BibNumber><Status>OK</Status>
//!         <SplitTime><ControlCode>31</ControlCode><Time>95</Time></SplitTime>
//!       </Result>
//!     </PersonResult>
//!   </ClassResult>
//! </ResultList>"#;
//!
//! let list = ResultList::parse(xml)?;
//! let ranked = rank_category(&list.categories[0]);
//! let order = ranked.display_order_where(|_| true);
//! let view = CategoryView::build(0, &ranked, &order);
//!
//! assert_eq!(view.rows[0].name, "Anne Martin");
//! assert_eq!(view.rows[0].rank, "1");
//! assert_eq!(view.rows[0].time, "1:35");
//! # Ok::<(), ofresults::ResultsError>(())
//! ```
//!
//! ## Example (public board)
//!
//! ```rust,no_run
//! use ofresults::{BoardConfig, PublicBoard};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> ofresults::Result<()> {
//!     let config = BoardConfig::load("board.yaml")?;
//!     config.init_tracing()?;
//!
//!     let board = PublicBoard::open(&config, "course.xml").await?;
//!     for category in board.render() {
//!         println!("{} ({} runners)", category.label, category.runner_count());
//!     }
//!     Ok(())
//! }
//! ```

// Core types and error handling
mod error;
#[cfg_attr(any(test, feature = "benchmark"), path = "test_utils.rs")]
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod types;
mod xml_utils;

// Extraction and ranking
pub mod iof;
pub mod ranking;
pub mod view;

// Boards and their inputs
pub mod board;
pub mod config;
pub mod source;
pub mod sources;

// Core exports
pub use error::*;
pub use types::*;

pub use board::{CategoryOption, EventOption, Filter, PublicBoard, ResultsBoard};
pub use config::BoardConfig;
pub use iof::ResultList;
pub use ranking::{BestLegTimes, RankedCategory, rank_category};
pub use source::ResultSource;
pub use sources::{DirectorySource, MemorySource};
pub use view::{CategoryView, RunnerRow, format_time};
