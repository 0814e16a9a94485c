//! Text distance helpers shared by ranking and matching.

/// Levenshtein edit distance between two strings.
///
/// Case-sensitive, computed over Unicode scalar values rather than bytes.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    // Two-row formulation; the full matrix is never needed.
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr: Vec<usize> = vec![0; b_chars.len() + 1];

    for (i, a_char) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = if a_char == b_char { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Distance between an expected name and a candidate name, lowercased.
///
/// File names frequently embed the wanted title verbatim plus decoration
/// (track numbers, extensions, quality tags), so substring containment
/// counts as a perfect match regardless of how long the decoration is.
pub fn compare_names(wanted: &str, found: &str) -> usize {
    let wanted = wanted.to_lowercase();
    let found = found.to_lowercase();
    if found.contains(&wanted) {
        return 0;
    }
    levenshtein(&wanted, &found)
}
