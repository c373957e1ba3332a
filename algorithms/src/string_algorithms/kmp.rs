//! Knuth-Morris-Pratt substring search over UTF-8 bytes.
//!
//! Variables:
//!   t, p : text and pattern bytes, lengths n, m
//!   lps  : lps[i] = length of the longest proper prefix of p[..=i] that is also its suffix
//!
//! Equations:
//!   on mismatch after j matched bytes: j = lps[j-1]   (text index never moves back)
//!   O(n + m) time, O(m) space
//!
//! Matches of a valid UTF-8 pattern always start on a char boundary, so the
//! returned byte offsets can slice `text` directly.

fn failure_table(p: &[u8]) -> Vec<usize> {
    let mut lps = vec![0; p.len()];
    let mut len = 0;
    for i in 1..p.len() {
        while len > 0 && p[i] != p[len] {
            len = lps[len - 1];
        }
        if p[i] == p[len] {
            len += 1;
            lps[i] = len;
        }
    }
    lps
}

fn kmp_scan(text: &str, pattern: &str, first_only: bool) -> Vec<usize> {
    if pattern.is_empty() {
        let boundaries = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()));
        return if first_only {
            boundaries.take(1).collect()
        } else {
            boundaries.collect()
        };
    }

    let t = text.as_bytes();
    let p = pattern.as_bytes();
    let lps = failure_table(p);

    let mut res = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < t.len() {
        if t[i] == p[j] {
            i += 1;
            j += 1;
            if j == p.len() {
                res.push(i - j);
                if first_only {
                    break;
                }
                j = lps[j - 1];
            }
        } else if j > 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }
    res
}

/// Byte offsets of every (possibly overlapping) occurrence of `pattern`.
///
/// Offsets count UTF-8 bytes, not chars: in `"éa"` the `a` is at 2.
/// An empty pattern matches at every char boundary, including `text.len()`.
pub fn find_pattern(text: &str, pattern: &str) -> Vec<usize> {
    kmp_scan(text, pattern, false)
}

/// Byte offset of the first occurrence of `pattern`.
pub fn find_first(text: &str, pattern: &str) -> Option<usize> {
    kmp_scan(text, pattern, true).first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_overlapping_matches() {
        assert_eq!(find_pattern("AABAACAADAABAAABAA", "AABA"), vec![0, 9, 13]);
        assert_eq!(find_pattern("aaaa", "aa"), vec![0, 1, 2]);
    }

    #[test]
    fn no_match_and_long_pattern() {
        assert!(find_pattern("hello", "xyz").is_empty());
        assert!(find_pattern("ab", "abc").is_empty());
        assert_eq!(find_first("hello", "z"), None);
    }

    #[test]
    fn first_match() {
        assert_eq!(find_first("abcabc", "cab"), Some(2));
        assert_eq!(find_first("abcabc", "abc"), Some(0));
    }

    #[test]
    fn empty_pattern_matches_each_boundary() {
        assert_eq!(find_pattern("ab", ""), vec![0, 1, 2]);
        assert_eq!(find_pattern("", ""), vec![0]);
        assert_eq!(find_pattern("é", ""), vec![0, 2]);
        assert_eq!(find_pattern("éa", "a"), vec![2]);
        assert_eq!(find_first("xyz", ""), Some(0));
    }

    #[test]
    fn offsets_slice_multibyte_text() {
        let text = "naïve café, café";
        let hits = find_pattern(text, "café");
        assert_eq!(hits.len(), 2);
        for &h in &hits {
            assert!(text[h..].starts_with("café"));
        }
    }

    #[test]
    fn failure_table_shape() {
        assert_eq!(failure_table(b"AABAACAABAA"), vec![0, 1, 0, 1, 2, 0, 1, 2, 3, 4, 5]);
    }
}
