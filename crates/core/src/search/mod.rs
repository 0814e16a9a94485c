//! Search result extraction and the page client.
//!
//! The extractor turns a parsed result page into an ordered list of
//! [`TorrentCandidate`]s; the client wraps the single page fetch around it.
//! Ranking and file matching live in their own modules and consume the
//! extractor's output.

mod client;
mod extractor;
mod types;

pub use client::{PirateBayClient, ReleaseSearcher};
pub use extractor::{extract_candidates, parse_results};
pub use types::{ExtractError, RowField, SearchError, TorrentCandidate};
