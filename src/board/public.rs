//! Spectator board for a single published file

use tracing::info;

use super::CategoryOption;
use crate::config::BoardConfig;
use crate::iof::ResultList;
use crate::ranking::rank_category;
use crate::source::ResultSource;
use crate::sources::DirectorySource;
use crate::types::EventInfo;
use crate::view::CategoryView;
use crate::Result;

/// Board state behind the public page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicBoard {
    file_name: String,
    results: ResultList,
}

impl PublicBoard {
    /// Build a board from already fetched XML.
    pub fn from_xml(file_name: impl Into<String>, xml: &str) -> Result<Self> {
        let results = ResultList::parse(xml)?;
        Ok(Self { file_name: file_name.into(), results })
    }

    /// Fetch `file_name` from `source` and parse it. Errors are returned as is.
    pub async fn load<S>(source: &S, file_name: &str) -> Result<Self>
    where
        S: ResultSource + ?Sized,
    {
        let xml = source.fetch(file_name).await?;
        let board = Self::from_xml(file_name, &xml)?;
        info!(
            file = file_name,
            categories = board.results.categories.len(),
            "Public board loaded"
        );
        Ok(board)
    }

    /// Load `file_name` from the configured results directory.
    pub async fn open(config: &BoardConfig, file_name: &str) -> Result<Self> {
        Self::load(&DirectorySource::new(&config.results_dir), file_name).await
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn results(&self) -> &ResultList {
        &self.results
    }

    pub fn event(&self) -> Option<&EventInfo> {
        self.results.event.as_ref()
    }

    /// Main heading, `"date · id"` or the event name. `None` without an `Event`.
    pub fn event_title(&self) -> Option<String> {
        self.event().map(EventInfo::title)
    }

    /// Secondary heading: the event name or its generic fallback.
    pub fn event_subtitle(&self) -> Option<&str> {
        self.event().map(EventInfo::display_name)
    }

    /// Jump-selector entries for categories that have runners.
    pub fn category_options(&self) -> Vec<CategoryOption> {
        self.results
            .categories
            .iter()
            .enumerate()
            .filter(|(_, category)| !category.runners.is_empty())
            .map(|(index, category)| CategoryOption {
                index,
                key: category.key().to_string(),
                label: category.name.clone(),
                meta: category.id.clone(),
            })
            .collect()
    }

    /// Every category with runners, all runners shown in display order.
    pub fn render(&self) -> Vec<CategoryView> {
        self.results
            .categories
            .iter()
            .enumerate()
            .filter(|(_, category)| !category.runners.is_empty())
            .map(|(index, category)| {
                let ranked = rank_category(category);
                let order = ranked.display_order_where(|_| true);
                CategoryView::build(index, &ranked, &order)
            })
            .collect()
    }
}
