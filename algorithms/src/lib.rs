//! # Classic Algorithms
//!
//! In-memory containers and textbook algorithms, organized by category.
//!
//! ## Modules
//!
//! - `data_structures` – Linked list, binary search tree, min-heap
//! - `graph` – Adjacency lists, keyed graph, BFS and DFS
//! - `sorting` – Quick sort, merge sort (stable), heap sort
//! - `searching` – Binary and linear search
//! - `dynamic_programming` – Fibonacci, longest common subsequence, 0/1 knapsack
//! - `string_algorithms` – Palindromes, KMP pattern matching
//! - `catalogue` – Complexity table for every component
//!
//! Every operation is synchronous and owns no external resources. Failures
//! are reported through [`AlgoError`]; callers that share a structure across
//! threads must supply their own locking.
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use classic_algorithms::sorting::merge_sort;
//!
//! let sorted = merge_sort(&[3, 1, 2]);
//! assert_eq!(sorted, vec![1, 2, 3]);
//! ```

pub mod catalogue;
pub mod data_structures;
pub mod dynamic_programming;
pub mod error;
pub mod graph;
pub mod logging;
pub mod searching;
pub mod sorting;
pub mod string_algorithms;

pub use error::{AlgoError, Result};
