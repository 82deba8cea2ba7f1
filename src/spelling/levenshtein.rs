//! Levenshtein distance calculation for dictionary suggestions.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    distance_chars(&s1_chars, &s2_chars)
}

/// Calculate Levenshtein distance with a maximum threshold for early termination.
/// Returns None if the distance exceeds the threshold, which can be more efficient
/// for filtering candidates.
pub fn levenshtein_distance_threshold(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    distance_chars_threshold(&s1_chars, &s2_chars, threshold)
}

#[allow(clippy::needless_range_loop)]
fn distance_chars(s1: &[char], s2: &[char]) -> usize {
    let len1 = s1.len();
    let len2 = s2.len();

    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];

    // Transforming to or from the empty prefix
    for i in 0..=len1 {
        matrix[i][0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            matrix[i][j] = if s1[i - 1] == s2[j - 1] {
                matrix[i - 1][j - 1]
            } else {
                1 + min(
                    matrix[i - 1][j - 1], // substitution
                    min(
                        matrix[i - 1][j], // deletion
                        matrix[i][j - 1], // insertion
                    ),
                )
            };
        }
    }

    matrix[len1][len2]
}

#[allow(clippy::needless_range_loop)]
fn distance_chars_threshold(s1: &[char], s2: &[char], threshold: usize) -> Option<usize> {
    let len1 = s1.len();
    let len2 = s2.len();

    // Every length difference costs at least one insertion or deletion
    if len1.abs_diff(len2) > threshold {
        return None;
    }

    if len1 == 0 {
        return Some(len2);
    }
    if len2 == 0 {
        return Some(len1);
    }

    // Use only two rows for space optimization
    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;
        let mut min_in_row = i;

        for j in 1..=len2 {
            curr_row[j] = if s1[i - 1] == s2[j - 1] {
                prev_row[j - 1]
            } else {
                1 + min(prev_row[j - 1], min(prev_row[j], curr_row[j - 1]))
            };

            min_in_row = min(min_in_row, curr_row[j]);
        }

        // Row minima never decrease, so the final cell cannot come back under
        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[len2];
    if distance <= threshold {
        Some(distance)
    } else {
        None
    }
}

/// Matcher for calculating distances between one query and many candidates.
/// The query is decoded into characters once and reused for every candidate.
#[derive(Debug, Clone)]
pub struct LevenshteinMatcher {
    query: String,
    query_chars: Vec<char>,
}

impl LevenshteinMatcher {
    /// Create a new matcher for the given query string.
    pub fn new(query: impl Into<String>) -> Self {
        let query = query.into();
        let query_chars = query.chars().collect();

        LevenshteinMatcher { query, query_chars }
    }

    /// Get the original query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Calculate distance to a candidate string.
    pub fn distance(&self, candidate: &str) -> usize {
        let candidate_chars: Vec<char> = candidate.chars().collect();
        distance_chars(&candidate_chars, &self.query_chars)
    }

    /// Calculate distance with threshold for early termination.
    pub fn distance_threshold(&self, candidate: &str, threshold: usize) -> Option<usize> {
        let candidate_chars: Vec<char> = candidate.chars().collect();
        distance_chars_threshold(&candidate_chars, &self.query_chars, threshold)
    }

    /// Check if a candidate is within the given edit distance threshold.
    pub fn is_match(&self, candidate: &str, max_distance: usize) -> bool {
        self.distance_threshold(candidate, max_distance).is_some()
    }
}
