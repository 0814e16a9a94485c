//! Candidate extraction from the search result page tree.
//!
//! The page carries no semantic ids, so every field is reached by a fixed
//! positional path rooted at its result row. The paths were derived
//! empirically from the live page layout and live in one table below;
//! layout drift breaks here and nowhere else.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use scraper::Html;

use crate::markup::{find_by_kind, resolve_path, MarkupNode, PathStep};

use super::types::{ExtractError, RowField, TorrentCandidate};

use PathStep::{FirstChild, NextSibling};

/// Kind of the element holding all result rows.
const CONTAINER_KIND: &str = "tbody";

/// Kind of one result row among the container's direct children.
const ROW_KIND: &str = "tr";

/// The cell the field paths below are rooted at, reached from the row.
const ROW_ROOT_PATH: &[PathStep] = &[FirstChild, NextSibling, NextSibling, NextSibling];

/// Title text node.
const NAME_PATH: &[PathStep] = &[FirstChild, NextSibling, FirstChild, NextSibling, FirstChild];

/// Element carrying the download link in its `href`.
const LINK_PATH: &[PathStep] = &[FirstChild, NextSibling, NextSibling, NextSibling];

/// Seeder count text node. Rooted at the row root's siblings, not its
/// children: the counts live in later cells of the same row.
const SEEDERS_PATH: &[PathStep] = &[NextSibling, NextSibling, FirstChild];

/// Leecher count text node.
const LEECHERS_PATH: &[PathStep] = &[
    NextSibling,
    NextSibling,
    NextSibling,
    NextSibling,
    FirstChild,
];

/// Free-text description node holding the size annotation.
const INFO_PATH: &[PathStep] = &[
    FirstChild,
    NextSibling,
    NextSibling,
    NextSibling,
    NextSibling,
    NextSibling,
    NextSibling,
    NextSibling,
    FirstChild,
];

/// The one bit-exact textual contract with the page format. Preserved
/// verbatim; do not reformat.
static SIZE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Size (?P<size>\d+\.\d+) (?P<sizetype>[K|M|G])iB").expect("size pattern is valid")
});

/// Parse a page and extract its candidates.
///
/// Convenience wrapper over [`extract_candidates`] for callers holding the
/// raw page body.
pub fn parse_results(html: &str) -> Result<Vec<TorrentCandidate>, ExtractError> {
    let document = Html::parse_document(html);
    extract_candidates(document.tree.root())
}

/// Extract all candidates from a parsed page tree, in row order.
///
/// Fails with [`ExtractError::ContainerNotFound`] when the page has no
/// result section at all; a present-but-empty section yields an empty Vec.
/// The first row that fails to parse aborts the whole extraction: a partial
/// result set is worse than a hard failure, since a single layout drift
/// invalidates every subsequent row's assumed offsets.
pub fn extract_candidates<'a, N: MarkupNode<'a>>(
    root: N,
) -> Result<Vec<TorrentCandidate>, ExtractError> {
    let container = find_by_kind(root, CONTAINER_KIND).ok_or(ExtractError::ContainerNotFound)?;

    let mut candidates = Vec::new();
    let mut child = container.first_child();
    while let Some(node) = child {
        if node.kind() == ROW_KIND {
            candidates.push(extract_row(node, candidates.len())?);
        }
        child = node.next_sibling();
    }
    Ok(candidates)
}

/// Extract one candidate from a result row.
fn extract_row<'a, N: MarkupNode<'a>>(
    row: N,
    index: usize,
) -> Result<TorrentCandidate, ExtractError> {
    let root = field_node(row, index, RowField::Root, ROW_ROOT_PATH)?;

    let name = field_node(root, index, RowField::Name, NAME_PATH)?
        .kind()
        .to_string();

    // A missing href is tolerated as an empty link; a missing link element
    // is not.
    let link = field_node(root, index, RowField::Link, LINK_PATH)?
        .attr("href")
        .unwrap_or_default()
        .to_string();

    let seeders = parse_count(
        field_node(root, index, RowField::Seeders, SEEDERS_PATH)?.kind(),
        index,
        RowField::Seeders,
    )?;
    let leechers = parse_count(
        field_node(root, index, RowField::Leechers, LEECHERS_PATH)?.kind(),
        index,
        RowField::Leechers,
    )?;

    let info = field_node(root, index, RowField::Info, INFO_PATH)?.kind();
    let size_bytes = parse_size(info);

    Ok(TorrentCandidate {
        name,
        link,
        seeders,
        leechers,
        size_bytes,
    })
}

fn field_node<'a, N: MarkupNode<'a>>(
    start: N,
    row: usize,
    field: RowField,
    path: &[PathStep],
) -> Result<N, ExtractError> {
    resolve_path(start, path).ok_or_else(|| ExtractError::RowParse {
        row,
        field,
        detail: "navigation failed".to_string(),
    })
}

fn parse_count(text: &str, row: usize, field: RowField) -> Result<u32, ExtractError> {
    text.parse().map_err(|_| ExtractError::RowParse {
        row,
        field,
        detail: format!("invalid number {text:?}"),
    })
}

/// Decode the size annotation from the row's description text.
///
/// Absent or unmatched sizes decode to 0: size is cosmetic, unlike the
/// seeder and leecher counts that feed ranking.
fn parse_size(info: &str) -> u64 {
    SIZE_PATTERN
        .captures(info)
        .and_then(|caps| {
            let value: f64 = caps.name("size")?.as_str().parse().ok()?;
            let multiplier: u64 = match caps.name("sizetype")?.as_str() {
                "K" => 1 << 10,
                "M" => 1 << 20,
                "G" => 1 << 30,
                _ => return None,
            };
            Some((value * multiplier as f64) as u64)
        })
        .unwrap_or(0)
}
