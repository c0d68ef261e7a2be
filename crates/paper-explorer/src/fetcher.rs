//! Paper lookup with its bounded citation neighborhood.

use crate::client::SemanticScholarClient;
use crate::config::{Config, fields};
use crate::error::FetchError;
use crate::models::{Doi, PaperRecord};

/// Result of a lookup.
///
/// `Found` with empty lists means the paper has no known citations;
/// `Failed` means the lookup itself did not succeed.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The API returned the paper.
    Found(PaperRecord),
    /// The identifier, the transport, or the API failed.
    Failed(FetchError),
}

impl FetchOutcome {
    /// Whether the lookup succeeded.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The fetched record, if any.
    #[must_use]
    pub const fn record(&self) -> Option<&PaperRecord> {
        match self {
            Self::Found(record) => Some(record),
            Self::Failed(_) => None,
        }
    }

    /// The failure, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Found(_) => None,
            Self::Failed(err) => Some(err),
        }
    }

    /// The fetched record, or an empty one on failure.
    #[must_use]
    pub fn into_record(self) -> PaperRecord {
        match self {
            Self::Found(record) => record,
            Self::Failed(_) => PaperRecord::empty(),
        }
    }
}

/// Fetches a paper and its citing/cited papers.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: SemanticScholarClient,
    neighbor_limit: usize,
}

impl Fetcher {
    /// Create a fetcher around an existing client.
    #[must_use]
    pub fn new(client: SemanticScholarClient, config: &Config) -> Self {
        Self { client, neighbor_limit: config.neighbor_limit }
    }

    /// Build the client from configuration and wrap it.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(SemanticScholarClient::new(config)?, config))
    }

    /// Look up `identifier` (a DOI or a URL containing one).
    ///
    /// Never returns an error to the caller; failures are logged and carried
    /// in [`FetchOutcome::Failed`].
    pub async fn fetch(&self, identifier: &str) -> FetchOutcome {
        match self.try_fetch(identifier).await {
            Ok(record) => {
                tracing::info!(
                    title = %record.title,
                    citing = record.related_papers.len(),
                    cited = record.cited_papers.len(),
                    "Fetched paper"
                );
                FetchOutcome::Found(record)
            }
            Err(err) => {
                tracing::error!(identifier, error = %err, "Error fetching paper");
                FetchOutcome::Failed(err)
            }
        }
    }

    async fn try_fetch(&self, identifier: &str) -> Result<PaperRecord, FetchError> {
        let doi = Doi::parse(identifier)?;
        let paper = self.client.get_paper_by_doi(&doi, fields::NEIGHBORHOOD).await?;

        Ok(PaperRecord::from_api(&paper, Some(doi.as_str()), self.neighbor_limit))
    }
}
