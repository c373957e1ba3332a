pub mod heap_sort;
pub mod merge_sort;
pub mod quick_sort;

use serde::Serialize;

pub use heap_sort::heap_sort;
pub use merge_sort::{merge_sort, merge_sort_by, merge_sort_in_place};
pub use quick_sort::quick_sort;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SortAlgorithm {
    Quick,
    Merge,
    Heap,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 3] = [Self::Quick, Self::Merge, Self::Heap];

    pub fn name(self) -> &'static str {
        match self {
            Self::Quick => "quick sort",
            Self::Merge => "merge sort",
            Self::Heap => "heap sort",
        }
    }

    /// Only merge sort keeps equal elements in input order.
    pub fn is_stable(self) -> bool {
        matches!(self, Self::Merge)
    }

    pub fn sort<T: Ord + Clone>(self, arr: &mut [T]) {
        match self {
            Self::Quick => quick_sort(arr),
            Self::Merge => merge_sort_in_place(arr),
            Self::Heap => heap_sort(arr),
        }
    }
}
