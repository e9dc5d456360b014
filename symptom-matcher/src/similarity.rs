//! Fuzzy string similarity on a 0..=100 scale
//!
//! All scores are normalized Indel similarities from `rapidfuzz`, computed
//! over Unicode scalar values, scaled to 100 and rounded half to even.
//! Token-sort similarity pre-processes both strings (non-alphanumerics
//! become spaces, lower-cased, trimmed) and sorts their whitespace tokens
//! first, which makes "pain in chest" and "chest pain in" identical.

use rapidfuzz::distance::indel;

/// Round to the nearest integer, ties to even
pub fn round_half_even(value: f64) -> f64 {
    let rounded = value.round();
    if (value - value.trunc()).abs() == 0.5 && rounded % 2.0 != 0.0 {
        rounded - value.signum()
    } else {
        rounded
    }
}

/// Round to one decimal place, ties to even
pub fn round_one_decimal(value: f64) -> f64 {
    round_half_even(value * 10.0) / 10.0
}

/// Replace every non-word character with a space, lower-case and trim
pub fn preprocess(text: &str) -> String {
    let replaced: String = text
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
        .collect();
    replaced.to_lowercase().trim().to_string()
}

/// Indel similarity of two strings as they are
pub fn ratio(a: &str, b: &str) -> u8 {
    to_percent(indel_score(a, b))
}

/// Unrounded [`ratio`], for callers comparing against fractional cut-offs
pub fn indel_score(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    indel::normalized_similarity(a.chars(), b.chars()) * 100.0
}

/// Similarity after pre-processing and sorting tokens alphabetically
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    let a = sorted_tokens(a);
    let b = sorted_tokens(b);
    ratio(&a, &b)
}

/// Best similarity of the shorter string against any alignment with the
/// longer one, including alignments hanging over either end
///
/// Case is significant; callers normalize what they need to.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    to_percent(partial_score(a, b))
}

/// Unrounded [`partial_ratio`]
pub fn partial_score(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (needle, haystack) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    if needle.is_empty() {
        return 0.0;
    }

    let best = best_alignment(needle, haystack);
    if best < 100.0 && needle.len() == haystack.len() {
        return best.max(best_alignment(haystack, needle));
    }
    best
}

/// Score `needle` against every prefix, full-length window and suffix of
/// `haystack`; partial alignments only count when they start or end on a
/// character the needle contains
fn best_alignment(needle: &[char], haystack: &[char]) -> f64 {
    let len = needle.len();
    let in_needle = |c: &char| needle.contains(c);

    let prefixes = (1..len).filter_map(|end| haystack.get(..end));
    let windows = haystack.windows(len);
    let suffixes = (haystack.len().saturating_sub(len) + 1..haystack.len())
        .filter_map(|start| haystack.get(start..))
        .filter(|suffix| suffix.first().is_some_and(in_needle));

    let mut best = 0.0_f64;
    for candidate in prefixes
        .chain(windows)
        .filter(|window| window.last().is_some_and(in_needle))
        .chain(suffixes)
    {
        best = best.max(indel::normalized_similarity(needle.iter().copied(), candidate.iter().copied()) * 100.0);
        if best >= 100.0 {
            break;
        }
    }
    best
}

fn sorted_tokens(text: &str) -> String {
    let processed = preprocess(text);
    let mut tokens: Vec<&str> = processed.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn to_percent(score: f64) -> u8 {
    round_half_even(score).clamp(0.0, 100.0) as u8
}
