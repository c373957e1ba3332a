//! String algorithms over `&str`.
//!
//! Positions returned here are UTF-8 byte offsets, so they can slice the
//! input directly. Convert with `text[..i].chars().count()` for a char index.

pub mod kmp;
pub mod palindrome;

pub use kmp::{find_first, find_pattern};
pub use palindrome::{is_palindrome, longest_palindrome_bounds, longest_palindromic_substring};
