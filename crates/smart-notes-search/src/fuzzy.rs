//! Character-level fuzzy string similarity.
//!
//! Scores are in `[0, 100]`. [`ratio`] compares two whole strings;
//! [`partial_ratio`] scores the shorter string against its best-aligning
//! substring of the longer one, so "groceries" scores 100 against
//! "buy groceries today".

use similar::TextDiff;

/// Highest possible similarity score.
pub const MAX_SCORE: f64 = 100.0;

/// Normalized indel similarity of `a` and `b`.
///
/// Computed as `100 * 2M / (|a| + |b|)` where `M` is the number of matching
/// characters in an optimal character diff. Two empty strings score 100.
pub fn ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return MAX_SCORE;
    }
    f64::from(TextDiff::from_chars(a, b).ratio()) * MAX_SCORE
}

/// Best similarity between the shorter string and any window of the longer.
///
/// Windows are every prefix of the longer string shorter than the needle,
/// every needle-length window, and every suffix shorter than the needle.
/// Returns 0 when either string is empty.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (needle, haystack) = if a_chars.len() <= b_chars.len() {
        (a, b_chars)
    } else {
        (b, a_chars)
    };
    let m = needle.chars().count();
    let n = haystack.len();

    let mut best = 0.0_f64;
    let mut score_window = |window: &[char]| -> bool {
        let w: String = window.iter().collect();
        let score = ratio(needle, &w);
        if score > best {
            best = score;
        }
        best >= MAX_SCORE
    };

    // Prefixes shorter than the needle.
    for len in 1..m {
        if score_window(&haystack[..len]) {
            return MAX_SCORE;
        }
    }
    for start in 0..=(n - m) {
        if score_window(&haystack[start..start + m]) {
            return MAX_SCORE;
        }
    }
    // Suffixes shorter than the needle.
    for len in 1..m {
        if score_window(&haystack[n - len..]) {
            return MAX_SCORE;
        }
    }

    best
}
