//! Types for the search result pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One parsed search result, a downloadable torrent.
///
/// Constructed once per result row by the extractor and never mutated
/// afterwards; ranking reorders candidates wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorrentCandidate {
    /// Display title as found on the page.
    pub name: String,
    /// Opaque download identifier, usually a magnet URI. Never parsed
    /// here; empty when the page carried no link attribute.
    pub link: String,
    /// Seeder count reported by the page.
    pub seeders: u32,
    /// Leecher count reported by the page.
    pub leechers: u32,
    /// Payload size in bytes, 0 when the size annotation did not parse.
    #[serde(default)]
    pub size_bytes: u64,
}

/// The per-row fields the extractor navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    /// The cell the other field paths are rooted at.
    Root,
    Name,
    Link,
    Seeders,
    Leechers,
    Info,
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RowField::Root => "root",
            RowField::Name => "name",
            RowField::Link => "link",
            RowField::Seeders => "seeders",
            RowField::Leechers => "leechers",
            RowField::Info => "info",
        };
        f.write_str(name)
    }
}

/// Errors from extracting candidates out of a page tree.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The page has no recognizable result section. Upstream this means
    /// "no results", not a parse failure.
    #[error("no result container found in page")]
    ContainerNotFound,

    /// A row's structure drifted from the assumed layout, or a numeric
    /// field held garbage. One drifted row invalidates every subsequent
    /// row's offsets, so the whole extraction is abandoned.
    #[error("result row {row}: could not extract {field} field: {detail}")]
    RowParse {
        /// Zero-based index among the container's row children.
        row: usize,
        field: RowField,
        detail: String,
    },
}

/// Errors from fetching and parsing the remote search page.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search page connection failed: {0}")]
    ConnectionFailed(String),

    #[error("search page request failed: {0}")]
    RequestFailed(String),

    #[error("search page returned HTTP {0}")]
    HttpStatus(u16),

    #[error("request timeout")]
    Timeout,

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_serialization_round_trip() {
        let candidate = TorrentCandidate {
            name: "Believe".to_string(),
            link: "magnet:?xt=abc".to_string(),
            seeders: 42,
            leechers: 3,
            size_bytes: 129_446_707,
        };

        let json = serde_json::to_string(&candidate).unwrap();
        let parsed: TorrentCandidate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, candidate);
    }

    #[test]
    fn test_candidate_size_defaults_to_zero() {
        let json = r#"{"name":"x","link":"","seeders":1,"leechers":0}"#;
        let parsed: TorrentCandidate = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.size_bytes, 0);
    }

    #[test]
    fn test_error_display() {
        let err = ExtractError::RowParse {
            row: 3,
            field: RowField::Seeders,
            detail: "navigation failed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "result row 3: could not extract seeders field: navigation failed"
        );

        assert_eq!(
            ExtractError::ContainerNotFound.to_string(),
            "no result container found in page"
        );
    }
}
