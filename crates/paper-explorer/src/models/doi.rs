//! DOI extraction from user input.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::FetchError;

static DOI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)10\.\d{4,9}/[-._;()/:A-Z0-9]+").expect("DOI pattern is valid")
});

/// A canonical DOI such as `10.1145/3341301.3359651`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Doi(String);

impl Doi {
    /// Resolve a bare DOI, a `doi:` string, or a URL containing one.
    ///
    /// Bare DOIs are taken verbatim, so characters the URL pattern does not
    /// cover (as in SICI-style DOIs) survive. DOIs pulled out of URLs lose
    /// any trailing `/` or `.`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidIdentifier` when no DOI is present.
    pub fn parse(input: &str) -> Result<Self, FetchError> {
        let trimmed = input.trim();

        if is_url(trimmed) {
            return DOI_PATTERN
                .find(trimmed)
                .map(|m| m.as_str().trim_end_matches(['/', '.']))
                .filter(|doi| doi.contains('/'))
                .map(|doi| Self(doi.to_string()))
                .ok_or_else(|| FetchError::invalid_identifier(input));
        }

        let bare = strip_prefix_ignore_case(trimmed, "doi:").map_or(trimmed, str::trim_start);
        if bare.starts_with("10.") && bare.contains('/') && !bare.contains(char::is_whitespace) {
            Ok(Self(bare.to_string()))
        } else {
            Err(FetchError::invalid_identifier(input))
        }
    }

    /// The DOI string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Paper ID form understood by the Graph API.
    #[must_use]
    pub fn api_id(&self) -> String {
        format!("DOI:{}", self.0)
    }
}

fn is_url(input: &str) -> bool {
    strip_prefix_ignore_case(input, "http://").is_some()
        || strip_prefix_ignore_case(input, "https://").is_some()
}

fn strip_prefix_ignore_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let head = input.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &input[prefix.len()..])
}

impl fmt::Display for Doi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
