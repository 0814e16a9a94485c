//! Galleon core: locate downloadable releases on a markup-based search
//! page, rank the candidates, and pair expected track names with the files
//! of a fetched bundle.
//!
//! Three pieces, consumed in dependency order:
//!
//! - [`search`] walks a parsed result page positionally and produces
//!   [`search::TorrentCandidate`]s (plus the thin client that fetches the
//!   page in the first place).
//! - [`ranking`] orders candidates by swarm health and title edit
//!   distance, best first.
//! - [`matching`] greedily pairs expected track titles with the file
//!   paths of a completed transfer.
//!
//! Everything in between (choosing a candidate, starting the transfer,
//! persistence, HTTP surface) belongs to the embedding application.

pub mod config;
pub mod markup;
pub mod matching;
pub mod ranking;
pub mod search;
pub mod testing;
pub mod text;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, SearchConfig,
};
pub use markup::{find_by_kind, resolve_path, MarkupNode, PathStep};
pub use matching::{assign_tracks, TrackAssignment};
pub use ranking::{rank, score, ScoredCandidate};
pub use search::{
    extract_candidates, parse_results, ExtractError, PirateBayClient, ReleaseSearcher, RowField,
    SearchError, TorrentCandidate,
};
