//! Configuration for the paper explorer.

use std::path::PathBuf;
use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Graph API endpoint.
    pub const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Maximum citing and cited papers kept per record.
    pub const NEIGHBOR_LIMIT: usize = 10;
}

/// Fields requested for the paper lookup.
pub mod fields {
    /// The main paper plus title, year and DOI of each neighbor.
    pub const NEIGHBORHOOD: &[&str] = &[
        "title",
        "year",
        "authors.name",
        "externalIds",
        "citations.title",
        "citations.year",
        "citations.externalIds",
        "references.title",
        "references.year",
        "references.externalIds",
    ];
}

/// Output file locations.
pub mod output {
    /// Default output directory, relative to the working directory.
    pub const DIR: &str = "outputs";

    /// Persisted record file name.
    pub const DATA_FILE: &str = "paper_data.json";

    /// Rendered graph file name.
    pub const GRAPH_FILE: &str = "paper_network.png";
}

/// Explorer configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Semantic Scholar API key (optional).
    pub api_key: Option<String>,

    /// Base URL for Graph API (for testing with mock servers).
    pub graph_api_url: String,

    /// Directory receiving the JSON dump and the graph image.
    pub output_dir: PathBuf,

    /// Cap on citing and cited papers.
    pub neighbor_limit: usize,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a new configuration with optional API key.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            graph_api_url: api::GRAPH_API.to_string(),
            output_dir: PathBuf::from(output::DIR),
            neighbor_limit: api::NEIGHBOR_LIMIT,
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            api_key: None,
            graph_api_url: format!("{}/graph/v1", base_url),
            output_dir: output_dir.into(),
            neighbor_limit: api::NEIGHBOR_LIMIT,
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Call `dotenv::dotenv()` first if a `.env` file should be honored.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create configuration from variables resolved by `lookup`.
    ///
    /// An empty `SEMANTIC_SCHOLAR_API_KEY` counts as no key.
    ///
    /// # Errors
    ///
    /// Returns error if `PAPER_EXPLORER_API_URL` is not an http(s) URL or
    /// `PAPER_EXPLORER_OUTPUT_DIR` is empty.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("SEMANTIC_SCHOLAR_API_KEY").filter(|k| !k.is_empty());
        let mut config = Self::new(api_key);

        if let Some(url) = lookup("PAPER_EXPLORER_API_URL") {
            anyhow::ensure!(
                url.starts_with("http://") || url.starts_with("https://"),
                "PAPER_EXPLORER_API_URL must be an http(s) URL, got '{url}'"
            );
            config.graph_api_url = url.trim_end_matches('/').to_string();
        }

        if let Some(dir) = lookup("PAPER_EXPLORER_OUTPUT_DIR") {
            anyhow::ensure!(!dir.is_empty(), "PAPER_EXPLORER_OUTPUT_DIR cannot be empty");
            config.output_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Where the record is persisted.
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        self.output_dir.join(output::DATA_FILE)
    }

    /// Where the graph image is written.
    #[must_use]
    pub fn graph_path(&self) -> PathBuf {
        self.output_dir.join(output::GRAPH_FILE)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert!(!config.has_api_key());
        assert_eq!(config.neighbor_limit, 10);
    }

    #[test]
    fn test_config_with_api_key() {
        let config = Config::new(Some("test-key".to_string()));
        assert!(config.has_api_key());
        assert_eq!(config.api_key, Some("test-key".to_string()));
    }

    #[test]
    fn test_output_paths() {
        let config = Config::default();
        assert_eq!(config.data_path(), PathBuf::from("outputs/paper_data.json"));
        assert_eq!(config.graph_path(), PathBuf::from("outputs/paper_network.png"));
    }

    #[test]
    fn test_fields() {
        assert!(fields::NEIGHBORHOOD.contains(&"citations.externalIds"));
        assert!(fields::NEIGHBORHOOD.contains(&"references.title"));
    }
}
