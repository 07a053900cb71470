//! Organiser board: multi-file import, event selection and filters

use futures::future::join_all;
use tracing::{debug, info, warn};
use url::form_urlencoded;

use super::{CategoryOption, EventOption, Filter, MISSING_EVENT_ID_LABEL};
use crate::config::BoardConfig;
use crate::iof::ResultList;
use crate::ranking::rank_category;
use crate::source::ResultSource;
use crate::types::EventInfo;
use crate::view::CategoryView;
use crate::{Result, ResultsError};

/// One imported file holding a valid event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedEvent {
    /// Selector key: event id, or the file name when the id is empty
    pub key: String,
    pub file_name: String,
    pub event: EventInfo,
    pub results: ResultList,
}

impl LoadedEvent {
    /// Selector label, `"id – name"`.
    pub fn label(&self) -> String {
        let id = if self.event.id.is_empty() { MISSING_EVENT_ID_LABEL } else { self.event.id.as_str() };
        let name = if self.event.name.is_empty() { &self.file_name } else { &self.event.name };
        format!("{} – {}", id, name)
    }
}

/// Board state behind the organiser page.
#[derive(Debug, Clone, Default)]
pub struct ResultsBoard {
    config: BoardConfig,
    /// Imported events in first-seen order
    events: Vec<LoadedEvent>,
    selected: Option<usize>,
    category_filter: Filter,
    club_filter: Filter,
}

impl ResultsBoard {
    pub fn new(config: BoardConfig) -> Self {
        Self { config, ..Self::default() }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Replace the board contents with the given `(file name, XML)` pairs.
    ///
    /// Files that fail to parse or carry no `Event` are skipped. A file whose
    /// event key was already seen replaces the earlier one in place. When a
    /// single event results it is selected.
    pub fn import<I, N, X>(&mut self, files: I) -> Result<()>
    where
        I: IntoIterator<Item = (N, X)>,
        N: Into<String>,
        X: AsRef<str>,
    {
        self.events.clear();
        self.clear_selection();

        for (file_name, xml) in files {
            let file_name = file_name.into();
            let results = match ResultList::parse(xml.as_ref()) {
                Ok(results) => results,
                Err(e) => {
                    warn!(file = %file_name, error = %e, "Skipping invalid result file");
                    continue;
                }
            };
            let event = match results.require_event(&file_name) {
                Ok(event) => event.clone(),
                Err(e) => {
                    warn!(error = %e, "Skipping result file");
                    continue;
                }
            };

            let key = if event.id.is_empty() { file_name.clone() } else { event.id.clone() };
            let loaded = LoadedEvent { key, file_name, event, results };

            match self.events.iter_mut().find(|e| e.key == loaded.key) {
                Some(existing) => {
                    debug!(key = %loaded.key, file = %loaded.file_name, "Replacing event with later file");
                    *existing = loaded;
                }
                None => self.events.push(loaded),
            }
        }

        if self.events.is_empty() {
            return Err(ResultsError::NoValidEvent);
        }

        info!(events = self.events.len(), "Imported result files");
        if self.events.len() == 1 {
            self.selected = Some(0);
        }
        Ok(())
    }

    /// Fetch `names` concurrently from `source`, then [`import`](Self::import) them.
    ///
    /// Files that cannot be fetched are skipped like invalid ones.
    pub async fn import_from<S>(&mut self, source: &S, names: &[&str]) -> Result<()>
    where
        S: ResultSource + ?Sized,
    {
        let fetched = join_all(names.iter().map(|&name| async move { (name, source.fetch(name).await) })).await;

        let files: Vec<(&str, String)> = fetched
            .into_iter()
            .filter_map(|(name, result)| match result {
                Ok(xml) => Some((name, xml)),
                Err(e) => {
                    warn!(file = name, error = %e, "Skipping result file that could not be fetched");
                    None
                }
            })
            .collect();

        self.import(files)
    }

    pub fn loaded_events(&self) -> &[LoadedEvent] {
        &self.events
    }

    /// Event selector entries in import order.
    pub fn events(&self) -> Vec<EventOption> {
        self.events.iter().map(|e| EventOption { key: e.key.clone(), label: e.label() }).collect()
    }

    /// Select the event with `key`. An unknown key clears the selection.
    ///
    /// Category and club filters are reset either way. Returns whether an
    /// event is now selected.
    pub fn select_event(&mut self, key: &str) -> bool {
        self.clear_selection();
        self.selected = self.events.iter().position(|e| e.key == key);
        if self.selected.is_none() {
            debug!(key, "No event for key, selection cleared");
        }
        self.selected.is_some()
    }

    pub fn selected_event(&self) -> Option<&LoadedEvent> {
        self.selected.and_then(|i| self.events.get(i))
    }

    /// Categories of the selected event, de-duplicated by key in first-seen order.
    pub fn categories(&self) -> Vec<CategoryOption> {
        let Some(selected) = self.selected_event() else {
            return Vec::new();
        };

        let mut options: Vec<CategoryOption> = Vec::new();
        for (index, category) in selected.results.categories.iter().enumerate() {
            if options.iter().any(|o| o.key == category.key()) {
                continue;
            }
            options.push(CategoryOption {
                index,
                key: category.key().to_string(),
                label: category.name.clone(),
                meta: category.id.clone(),
            });
        }
        options
    }

    /// Clubs of the selected event, sorted and de-duplicated.
    pub fn clubs(&self) -> Vec<String> {
        self.selected_event().map(|e| e.results.clubs()).unwrap_or_default()
    }

    pub fn category_filter(&self) -> &Filter {
        &self.category_filter
    }

    pub fn club_filter(&self) -> &Filter {
        &self.club_filter
    }

    pub fn set_category_filter(&mut self, filter: Filter) {
        self.category_filter = filter;
    }

    pub fn set_club_filter(&mut self, filter: Filter) {
        self.club_filter = filter;
    }

    /// Category views for the selected event under the current filters.
    ///
    /// Ranks and best legs always cover the whole category; the club filter
    /// only decides which rows appear. Categories left without rows are omitted.
    pub fn render(&self) -> Vec<CategoryView> {
        let Some(selected) = self.selected_event() else {
            return Vec::new();
        };

        selected
            .results
            .categories
            .iter()
            .enumerate()
            .filter(|(_, category)| self.category_filter.matches(category.key()))
            .filter_map(|(index, category)| {
                let ranked = rank_category(category);
                let order = ranked.display_order_where(|r| self.club_filter.matches(&r.club));
                (!order.is_empty()).then(|| CategoryView::build(index, &ranked, &order))
            })
            .collect()
    }

    /// Link to the public page for the selected event's file.
    pub fn public_url(&self) -> Option<String> {
        let selected = self.selected_event()?;
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("file", &selected.file_name)
            .finish();
        Some(format!("{}{}?{}", self.config.base_path, self.config.public_page, query))
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.category_filter = Filter::All;
        self.club_filter = Filter::All;
    }
}
