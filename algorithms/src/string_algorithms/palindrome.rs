//! Palindrome checks.
//!
//! Normalisation for `is_palindrome`: keep `char::is_alphanumeric` chars,
//! lowercase them, ignore everything else. `longest_palindrome_bounds`
//! compares chars exactly, with no normalisation.

use std::ops::Range;

/// Two-pointer check over the normalised chars. O(n).
pub fn is_palindrome(s: &str) -> bool {
    let cleaned: Vec<char> = s
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    let (mut i, mut j) = (0, cleaned.len());
    while i + 1 < j {
        if cleaned[i] != cleaned[j - 1] {
            return false;
        }
        i += 1;
        j -= 1;
    }
    true
}

/// Grow the palindrome `chars[start..end]` while its neighbours match.
fn expand(chars: &[char], mut start: usize, mut end: usize) -> (usize, usize) {
    while start > 0 && end < chars.len() && chars[start - 1] == chars[end] {
        start -= 1;
        end += 1;
    }
    (start, end)
}

/// Byte range of the longest palindromic substring, by expansion around
/// each odd and even center. O(n^2) time, O(n) space.
///
/// Among equally long candidates the leftmost wins. Empty input gives `0..0`.
pub fn longest_palindrome_bounds(s: &str) -> Range<usize> {
    let chars: Vec<char> = s.chars().collect();
    let offsets: Vec<usize> = s
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .collect();

    let (mut best_start, mut best_end) = (0, 0);
    for i in 0..chars.len() {
        for (start, end) in [expand(&chars, i, i + 1), expand(&chars, i + 1, i + 1)] {
            if end - start > best_end - best_start {
                best_start = start;
                best_end = end;
            }
        }
    }
    offsets[best_start]..offsets[best_end]
}

pub fn longest_palindromic_substring(s: &str) -> &str {
    &s[longest_palindrome_bounds(s)]
}
