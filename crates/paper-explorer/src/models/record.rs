//! The paper-and-neighbors record shared by every stage of a run.

use serde::{Deserialize, Serialize};

use super::{LinkedPaper, Paper, UNKNOWN};

/// One paper's metadata and its immediate citation neighbors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// Paper title ("Unknown" when the API had none).
    pub title: String,

    /// Author names in API order.
    pub authors: Vec<String>,

    /// Publication year.
    pub year: Option<i32>,

    /// DOI the record was fetched by.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,

    /// Papers citing this one.
    pub related_papers: Vec<PaperRef>,

    /// Papers this one cites.
    pub cited_papers: Vec<PaperRef>,
}

/// A citing or cited paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRef {
    /// Paper title ("Unknown" when the API had none).
    pub title: String,

    /// Digital Object Identifier.
    pub doi: Option<String>,

    /// Publication year.
    pub year: Option<i32>,
}

impl PaperRecord {
    /// The record a failed lookup degrades to.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            title: UNKNOWN.to_string(),
            authors: Vec::new(),
            year: None,
            doi: None,
            related_papers: Vec::new(),
            cited_papers: Vec::new(),
        }
    }

    /// Build a record from a lookup response, keeping at most `limit`
    /// citing and cited papers in the order the API returned them.
    ///
    /// `requested_doi` is used when the response carries no DOI of its own.
    #[must_use]
    pub fn from_api(paper: &Paper, requested_doi: Option<&str>, limit: usize) -> Self {
        Self {
            title: paper.title_or_default().to_string(),
            authors: paper.author_names(),
            year: paper.year,
            doi: paper.doi().or(requested_doi).map(str::to_string),
            related_papers: paper.citations().iter().take(limit).map(PaperRef::from).collect(),
            cited_papers: paper.references().iter().take(limit).map(PaperRef::from).collect(),
        }
    }

    /// True when nothing beyond placeholders is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    /// Author names as a comma-separated string.
    #[must_use]
    pub fn author_list(&self) -> String {
        self.authors.join(", ")
    }
}

impl Default for PaperRecord {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&LinkedPaper> for PaperRef {
    fn from(linked: &LinkedPaper) -> Self {
        Self {
            title: linked.title.as_deref().unwrap_or(UNKNOWN).to_string(),
            doi: linked.doi().map(str::to_string),
            year: linked.year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linked(title: &str) -> LinkedPaper {
        LinkedPaper { title: Some(title.to_string()), ..Default::default() }
    }

    #[test]
    fn test_from_api_truncates_in_order() {
        let paper = Paper {
            title: Some("Main".to_string()),
            citations: Some((0..15).map(|i| linked(&format!("citing {i}"))).collect()),
            references: Some((0..3).map(|i| linked(&format!("cited {i}"))).collect()),
            ..Default::default()
        };

        let record = PaperRecord::from_api(&paper, None, 10);
        assert_eq!(record.related_papers.len(), 10);
        assert_eq!(record.related_papers[0].title, "citing 0");
        assert_eq!(record.related_papers[9].title, "citing 9");
        assert_eq!(record.cited_papers.len(), 3);
    }

    #[test]
    fn test_from_api_placeholders() {
        let paper = Paper {
            references: Some(vec![LinkedPaper::default()]),
            ..Default::default()
        };

        let record = PaperRecord::from_api(&paper, Some("10.1/x"), 10);
        assert_eq!(record.title, "Unknown");
        assert_eq!(record.doi.as_deref(), Some("10.1/x"));
        assert_eq!(record.cited_papers[0].title, "Unknown");
        assert!(record.cited_papers[0].doi.is_none());
    }

    #[test]
    fn test_empty_record() {
        let record = PaperRecord::empty();
        assert!(record.is_empty());
        assert!(record.related_papers.is_empty());
        assert!(record.cited_papers.is_empty());
    }

    #[test]
    fn test_json_shape() {
        let record = PaperRecord {
            title: "T".to_string(),
            authors: vec!["A".to_string(), "B".to_string()],
            year: Some(2019),
            doi: None,
            related_papers: vec![],
            cited_papers: vec![PaperRef { title: "R".to_string(), doi: None, year: None }],
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("doi").is_none());
        assert_eq!(value["cited_papers"][0]["doi"], serde_json::Value::Null);
        assert_eq!(record.author_list(), "A, B");
    }
}
