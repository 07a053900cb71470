//! Source trait for raw result documents

use crate::Result;

/// Trait for places result files are fetched from
///
/// Sources abstract over where XML comes from (a published results
/// directory, memory, a web server) and return the raw document text. They do
/// no parsing; boards parse and extract what they fetch.
#[async_trait::async_trait]
pub trait ResultSource: Send + Sync {
    /// Fetch the document published under `name`
    ///
    /// Returns:
    /// - `Ok(xml)` - Raw document text
    /// - `Err(e)` - The document is unknown, unreadable or not valid UTF-8
    async fn fetch(&self, name: &str) -> Result<String>;
}
