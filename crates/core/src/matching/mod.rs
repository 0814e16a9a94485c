//! Greedy track-to-file assignment.
//!
//! Once a transfer's file manifest is known, each expected track title is
//! paired with the closest-named file. The strategy is greedy nearest
//! neighbor in track order: commit to the locally best file, remove it
//! from the pool, move on. It is deliberately not a minimum-cost bipartite
//! matching; a different track order can produce a different assignment,
//! and that order dependence is part of the observed contract.

use tracing::debug;

use crate::text::compare_names;

/// One track paired with its chosen file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackAssignment {
    /// Position of the track in the caller's title list.
    pub track_index: usize,
    /// The expected track title.
    pub title: String,
    /// Full path of the assigned file, as it appeared in the input.
    pub path: String,
}

/// Assign each track title to a distinct file path.
///
/// Distances are computed against the file's base name only, since
/// directory components carry album-level noise. Ties go to the earliest
/// file in the current pool order. When the pool runs dry, remaining
/// tracks simply get no assignment: the result holds
/// `min(titles.len(), files.len())` entries and never repeats a path.
pub fn assign_tracks(titles: &[String], files: &[String]) -> Vec<TrackAssignment> {
    let mut pool: Vec<String> = files.to_vec();
    let mut assignments = Vec::with_capacity(titles.len().min(files.len()));

    for (track_index, title) in titles.iter().enumerate() {
        if pool.is_empty() {
            continue;
        }

        let mut best_index = 0;
        let mut best_distance = usize::MAX;
        for (index, path) in pool.iter().enumerate() {
            let distance = compare_names(title, base_name(path));
            if distance < best_distance {
                best_index = index;
                best_distance = distance;
            }
        }

        let path = pool.remove(best_index);
        debug!(track = %title, file = %path, distance = best_distance, "assigned track");
        assignments.push(TrackAssignment {
            track_index,
            title: title.clone(),
            path,
        });
    }

    assignments
}

/// Final path component, split on either separator flavor: torrent
/// manifests mix them freely.
fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
