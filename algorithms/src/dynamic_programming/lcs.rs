//! Longest common subsequence by tabulation.
//!
//! Variables:
//!   a, b  : sequences of length m, n
//!   table : (m+1) x (n+1) matrix, table[i][j] = LCS length of a[..i], b[..j]
//!
//! Equations:
//!   table[0][*] = table[*][0] = 0
//!   table[i][j] = table[i-1][j-1] + 1                   if a[i-1] == b[j-1]
//!               = max(table[i-1][j], table[i][j-1])     otherwise
//!
//!   Backtracking from (m, n) moves up on ties.  O(m*n) time and space.

use tracing::trace;

fn build_table<T: PartialEq>(a: &[T], b: &[T]) -> Vec<Vec<usize>> {
    let (m, n) = (a.len(), b.len());
    trace!(rows = m + 1, cols = n + 1, "lcs table");
    let mut table = vec![vec![0usize; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1] + 1
            } else {
                table[i - 1][j].max(table[i][j - 1])
            };
        }
    }
    table
}

pub fn lcs_length<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    build_table(a, b)[a.len()][b.len()]
}

/// One longest common subsequence, reconstructed from the table.
pub fn lcs<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let table = build_table(a, b);
    let (mut i, mut j) = (a.len(), b.len());
    let mut out = Vec::with_capacity(table[i][j]);
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            out.push(a[i - 1].clone());
            i -= 1;
            j -= 1;
        } else if table[i - 1][j] >= table[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    out.reverse();
    out
}

/// [`lcs`] over the chars of two strings.
pub fn lcs_str(a: &str, b: &str) -> String {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    lcs(&a, &b).into_iter().collect()
}
