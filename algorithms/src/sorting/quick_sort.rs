//! In-place quicksort.
//!
//! Pivot:     last element of the range (fixed, no randomisation)
//! Partition: Lomuto; elements <= pivot move to the left block
//!
//! Average O(n log n). Already-sorted or reverse-sorted input puts the pivot
//! at an end on every step, which is the O(n^2) case. Recursion only enters
//! the smaller side, so stack depth stays O(log n) even then.

pub fn quick_sort<T: Ord>(arr: &mut [T]) {
    let mut arr = arr;
    while arr.len() > 1 {
        let pivot = partition(arr);
        let (left, right) = std::mem::take(&mut arr).split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick_sort(left);
            arr = right;
        } else {
            quick_sort(right);
            arr = left;
        }
    }
}

fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let len = arr.len();
    let pivot_index = len - 1;
    let mut i = 0;
    for j in 0..pivot_index {
        if arr[j] <= arr[pivot_index] {
            arr.swap(i, j);
            i += 1;
        }
    }
    arr.swap(i, pivot_index);
    i
}
