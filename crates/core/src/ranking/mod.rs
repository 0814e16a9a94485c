//! Candidate ranking.
//!
//! Orders candidates by a composite score: swarm health (leechers minus
//! seeders) plus edit distance between the candidate name and the expected
//! title. Lower is better. A torrent with zero seeders cannot be
//! downloaded at all, so its health saturates to the worst possible value
//! and no name match can rescue it.

use rand::Rng;

use crate::search::TorrentCandidate;
use crate::text::levenshtein;

/// A candidate paired with its computed score. Transient: only lives for
/// the duration of one ranking pass.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub candidate: TorrentCandidate,
    pub score: i64,
}

/// Composite score for one candidate against the expected title.
pub fn score(candidate: &TorrentCandidate, expected_title: &str) -> i64 {
    let name_score = levenshtein(expected_title, &candidate.name) as i64;
    health_score(candidate).saturating_add(name_score)
}

/// Swarm health term. Saturates at zero seeders regardless of leechers.
fn health_score(candidate: &TorrentCandidate) -> i64 {
    if candidate.seeders == 0 {
        return i64::MAX;
    }
    i64::from(candidate.leechers) - i64::from(candidate.seeders)
}

/// Order candidates ascending by score, best match first.
///
/// Returns a new ordering rather than shuffling the caller's data.
/// Internally a quicksort with a uniformly random pivot: expected
/// O(n log n), quadratic on adversarial inputs, which is fine for a single
/// page of results. Not stable; equal scores may come back in any order.
pub fn rank(candidates: Vec<TorrentCandidate>, expected_title: &str) -> Vec<TorrentCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .map(|candidate| ScoredCandidate {
            score: score(&candidate, expected_title),
            candidate,
        })
        .collect();

    quicksort(&mut scored);
    scored.into_iter().map(|s| s.candidate).collect()
}

fn quicksort(items: &mut [ScoredCandidate]) {
    if items.len() < 2 {
        return;
    }

    let last = items.len() - 1;
    let pivot = rand::thread_rng().gen_range(0..items.len());
    items.swap(pivot, last);

    let mut boundary = 0;
    for i in 0..last {
        if items[i].score < items[last].score {
            items.swap(i, boundary);
            boundary += 1;
        }
    }
    items.swap(boundary, last);

    let (left, right) = items.split_at_mut(boundary);
    quicksort(left);
    quicksort(&mut right[1..]);
}
