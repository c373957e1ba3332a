pub mod binary_search;
pub mod linear_search;

pub use binary_search::{binary_search, binary_search_leftmost};
pub use linear_search::linear_search;
