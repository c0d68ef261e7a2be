//! Paper data model matching the Semantic Scholar API schema.

use serde::Deserialize;

/// A paper lookup response with its citation neighborhood.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// List of authors.
    #[serde(default)]
    pub authors: Option<Vec<AuthorRef>>,

    /// External identifiers.
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,

    /// Papers citing this one, in API order.
    #[serde(default)]
    pub citations: Option<Vec<LinkedPaper>>,

    /// Papers this one cites, in API order.
    #[serde(default)]
    pub references: Option<Vec<LinkedPaper>>,
}

impl Paper {
    /// Get the paper title, falling back to "Unknown" if not available.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or(super::UNKNOWN)
    }

    /// Get the DOI if available.
    #[must_use]
    pub fn doi(&self) -> Option<&str> {
        self.external_ids.as_ref()?.doi.as_deref()
    }

    /// Author names in order; nameless authors become "Unknown".
    #[must_use]
    pub fn author_names(&self) -> Vec<String> {
        self.authors
            .iter()
            .flatten()
            .map(|a| a.name.as_deref().unwrap_or(super::UNKNOWN).to_string())
            .collect()
    }

    /// Citing papers, empty when the API left them out.
    #[must_use]
    pub fn citations(&self) -> &[LinkedPaper] {
        self.citations.as_deref().unwrap_or_default()
    }

    /// Cited papers, empty when the API left them out.
    #[must_use]
    pub fn references(&self) -> &[LinkedPaper] {
        self.references.as_deref().unwrap_or_default()
    }
}

/// Author reference as embedded in a paper.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRef {
    /// Author name.
    #[serde(default)]
    pub name: Option<String>,
}

/// A citing or cited paper inside a lookup response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedPaper {
    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// External identifiers.
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,

    /// Flat DOI field of the legacy v1 API.
    #[serde(default)]
    pub doi: Option<String>,
}

impl LinkedPaper {
    /// Get the DOI, preferring `externalIds.DOI`.
    #[must_use]
    pub fn doi(&self) -> Option<&str> {
        self.external_ids.as_ref().and_then(|ids| ids.doi.as_deref()).or(self.doi.as_deref())
    }
}

/// External identifiers for a paper.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalIds {
    /// Digital Object Identifier.
    #[serde(rename = "DOI", default)]
    pub doi: Option<String>,
}
