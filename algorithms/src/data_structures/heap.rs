//! Binary min-heap.
//!
//! Variables:
//!   data : Vec<T>  — heap array, 0-indexed
//!   N    : usize   — current size
//!
//! Equations:
//!   parent(i)     = (i - 1) / 2
//!   left_child(i) = 2*i + 1
//!   right_child(i)= 2*i + 2
//!
//!   Heap invariant: data[parent(i)] <= data[i]  for all i > 0
//!
//!   insert(x):      data[N] = x,  sift_up(N),    N' = N+1   O(log N)
//!   extract_min():  data[0] = data[N-1], N' = N-1, sift_down(0)  O(log N)
//!   from_vec(v):    sift_down(i) for i = N/2-1 down to 0     O(N)
//!
//!   sift_down prefers the left child when both children are equal.

use tracing::trace;

use crate::error::{AlgoError, Result};

#[derive(Debug, Clone)]
pub struct MinHeap<T: Ord> {
    data: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Heapify an arbitrary vector bottom-up.
    pub fn from_vec(data: Vec<T>) -> Self {
        let mut heap = Self { data };
        let n = heap.data.len();
        trace!(len = n, "building heap bottom-up");
        for i in (0..n / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    pub fn insert(&mut self, val: T) {
        self.data.push(val);
        self.sift_up(self.data.len() - 1);
    }

    pub fn extract_min(&mut self) -> Result<T> {
        if self.data.is_empty() {
            return Err(AlgoError::EmptyContainer);
        }
        // last element moves to the root, storage shrinks by one
        let min = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    pub fn peek_min(&self) -> Result<&T> {
        self.data.first().ok_or(AlgoError::EmptyContainer)
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Backing storage in heap order (not sorted).
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if self.data[child] >= self.data[parent] {
                return;
            }
            self.data.swap(child, parent);
            child = parent;
        }
    }

    /// Index of the child that should replace `parent`, if any is smaller.
    /// The right child must be strictly smaller than the left to win.
    fn smaller_child(&self, parent: usize) -> Option<usize> {
        let left = 2 * parent + 1;
        let right = left + 1;
        let pick = match (self.data.get(left), self.data.get(right)) {
            (Some(l), Some(r)) if r < l => right,
            (Some(_), _) => left,
            (None, _) => return None,
        };
        (self.data[pick] < self.data[parent]).then_some(pick)
    }

    fn sift_down(&mut self, mut parent: usize) {
        while let Some(child) = self.smaller_child(parent) {
            self.data.swap(parent, child);
            parent = child;
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_heap_order<T: Ord>(data: &[T]) {
        for i in 1..data.len() {
            assert!(data[(i - 1) / 2] <= data[i], "violated at index {i}");
        }
    }

    #[test]
    fn extracts_in_ascending_order() {
        let mut heap = MinHeap::new();
        for v in [5, 3, 7, 1, 9, 4] {
            heap.insert(v);
        }
        assert_eq!(heap.peek_min(), Ok(&1));
        let mut out = Vec::new();
        while heap.size() > 0 {
            out.push(heap.extract_min().unwrap());
        }
        assert_eq!(out, vec![1, 3, 4, 5, 7, 9]);
    }

    #[test]
    fn empty_heap_signals_empty_container() {
        let mut heap: MinHeap<i32> = MinHeap::new();
        assert_eq!(heap.peek_min(), Err(AlgoError::EmptyContainer));
        assert_eq!(heap.extract_min(), Err(AlgoError::EmptyContainer));
        assert_eq!(heap.size(), 0);
    }

    #[test]
    fn from_vec_builds_valid_heap() {
        let heap = MinHeap::from_vec(vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
        assert_eq!(heap.peek_min(), Ok(&0));
        assert_heap_order(&heap.into_vec());
    }

    #[derive(Debug)]
    struct Tagged(u8, char);

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }
    impl Eq for Tagged {}
    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    #[test]
    fn sift_down_prefers_left_on_tie() {
        let mut heap = MinHeap::from_vec(vec![
            Tagged(0, 'r'),
            Tagged(2, 'a'),
            Tagged(2, 'b'),
            Tagged(9, 'x'),
        ]);
        heap.extract_min().unwrap();
        let data = heap.into_vec();
        assert_eq!(data[0].1, 'a');
        assert_eq!(data[1].1, 'x');
        assert_eq!(data[2].1, 'b');
    }

    #[test]
    fn strictly_smaller_right_child_wins() {
        let mut heap = MinHeap::from_vec(vec![
            Tagged(0, 'r'),
            Tagged(3, 'a'),
            Tagged(2, 'b'),
            Tagged(9, 'x'),
        ]);
        heap.extract_min().unwrap();
        let data = heap.into_vec();
        assert_eq!(data[0].1, 'b');
        assert_eq!(data[2].1, 'x');
    }

    #[test]
    fn duplicates_survive() {
        let mut heap: MinHeap<_> = [2, 2, 1, 1].into_iter().collect();
        assert_eq!(heap.extract_min(), Ok(1));
        assert_eq!(heap.extract_min(), Ok(1));
        assert_eq!(heap.extract_min(), Ok(2));
        assert_eq!(heap.len(), 1);
    }
}
