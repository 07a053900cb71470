//! Board configuration
//!
//! Settings are read from YAML; every key is optional.
//!
//! ```yaml
//! results_dir: Resultats
//! public_page: public.html
//! base_path: /
//! log_filter: ofresults=debug
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::{Result, ResultsError};

/// Settings shared by the admin and public boards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Directory the public page loads result files from
    pub results_dir: PathBuf,
    /// Page name of the public results display
    pub public_page: String,
    /// Path prefix under which the public page is served
    pub base_path: String,
    /// Fallback `tracing` filter directive when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from("Resultats"),
            public_page: "public.html".to_string(),
            base_path: "/".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl BoardConfig {
    /// Parse configuration YAML. An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(yaml).map_err(|e| ResultsError::config_error(e.to_string()))
    }

    /// Read configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| ResultsError::file_error(path.to_path_buf(), e))?;
        Self::from_yaml(&yaml)
    }

    /// Install a `tracing` subscriber honouring `RUST_LOG`, falling back to `log_filter`.
    ///
    /// Does nothing when a global subscriber is already installed.
    pub fn init_tracing(&self) -> Result<()> {
        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(&self.log_filter)
                .map_err(|e| ResultsError::config_error(format!("log_filter: {}", e)))?,
        };
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_gives_defaults() {
        let config = BoardConfig::from_yaml("").unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.results_dir, PathBuf::from("Resultats"));
        assert_eq!(config.public_page, "public.html");
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = BoardConfig::from_yaml("results_dir: /srv/results\nbase_path: /co/\n").unwrap();
        assert_eq!(config.results_dir, PathBuf::from("/srv/results"));
        assert_eq!(config.base_path, "/co/");
        assert_eq!(config.public_page, "public.html");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = BoardConfig::from_yaml("scroll_speed: 3\n").unwrap_err();
        assert!(matches!(err, ResultsError::Config { .. }));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.yaml");
        std::fs::write(&path, "public_page: live.html\n").unwrap();

        let config = BoardConfig::load(&path).unwrap();
        assert_eq!(config.public_page, "live.html");

        let missing = BoardConfig::load(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(missing, ResultsError::File { .. }));
    }
}
