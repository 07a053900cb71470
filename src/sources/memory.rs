//! In-memory source

use std::collections::HashMap;

use crate::source::ResultSource;
use crate::{Result, ResultsError};

/// Source serving documents held in memory, keyed by file name.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: impl Into<String>, xml: impl Into<String>) -> Self {
        self.insert(name, xml);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, xml: impl Into<String>) {
        self.files.insert(name.into(), xml.into());
    }
}

#[async_trait::async_trait]
impl ResultSource for MemorySource {
    async fn fetch(&self, name: &str) -> Result<String> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| ResultsError::fetch_failed(name, "no such document"))
    }
}
