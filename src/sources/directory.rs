//! Directory source for published result files

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::source::ResultSource;
use crate::xml_utils::decode_result_xml;
use crate::{Result, ResultsError};

/// Source reading result files from a single directory
///
/// Only plain file names are accepted, so a public page can pass a
/// user-supplied `file` parameter straight through.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    /// Directory holding the published files
    root: PathBuf,
}

impl DirectorySource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `name` inside the directory, rejecting anything but a plain file name.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        let plain = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\'])
            && !name.contains('\0');
        if !plain {
            return Err(ResultsError::InvalidFileName { name: name.to_string() });
        }
        Ok(self.root.join(name))
    }
}

#[async_trait::async_trait]
impl ResultSource for DirectorySource {
    async fn fetch(&self, name: &str) -> Result<String> {
        let path = self.resolve(name)?;
        debug!(path = %path.display(), "Fetching result file");

        let data = tokio::fs::read(&path).await.map_err(|e| ResultsError::file_error(path.clone(), e))?;

        info!(file = name, bytes = data.len(), "Loaded result file");
        decode_result_xml(&data)
    }
}
