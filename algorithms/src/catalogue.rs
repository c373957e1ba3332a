//! Static table of every component in the crate: where it lives, what kind
//! of computation it is, and its time bound.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogueEntry {
    pub path: &'static str,
    pub kind: &'static str,
    pub time: &'static str,
    pub deterministic: bool,
}

const fn entry(path: &'static str, kind: &'static str, time: &'static str) -> CatalogueEntry {
    CatalogueEntry {
        path,
        kind,
        time,
        deterministic: true,
    }
}

pub const CATALOGUE: &[CatalogueEntry] = &[
    // Data structures
    entry("data_structures/linked_list.rs", "Linear container", "O(1) ends, O(n) find/delete"),
    entry("data_structures/bst.rs", "Ordered container", "O(h), h <= n"),
    entry("data_structures/heap.rs", "Priority container", "O(1) peek, O(log n) insert/extract"),
    // Graph
    entry("graph/bfs.rs", "Graph traversal", "O(V+E)"),
    entry("graph/dfs.rs", "Graph traversal", "O(V+E)"),
    // Sorting
    entry("sorting/quick_sort.rs", "Sorting", "O(n log n) avg, O(n^2) worst"),
    entry("sorting/merge_sort.rs", "Stable sorting", "O(n log n)"),
    entry("sorting/heap_sort.rs", "Sorting", "O(n log n)"),
    // Searching
    entry("searching/binary_search.rs", "Search", "O(log n)"),
    entry("searching/linear_search.rs", "Search", "O(n)"),
    // Dynamic programming
    entry("dynamic_programming/fibonacci.rs", "DP computation", "O(n)"),
    entry("dynamic_programming/lcs.rs", "DP tabulation", "O(m*n)"),
    entry("dynamic_programming/knapsack.rs", "DP tabulation", "O(n*W)"),
    // String algorithms
    entry("string_algorithms/kmp.rs", "String pattern matching", "O(n+m)"),
    entry("string_algorithms/palindrome.rs", "String analysis", "O(n) check, O(n^2) longest"),
];

pub fn lookup(path: &str) -> Option<&'static CatalogueEntry> {
    CATALOGUE.iter().find(|e| e.path == path)
}
