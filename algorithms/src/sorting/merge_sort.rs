//! Stable top-down merge sort.
//!
//! Variables:
//!   arr : &mut [T]  — range being sorted
//!   aux : Vec<T>    — one scratch buffer of length n, shared by every level
//!
//! Equations:
//!   mid = n / 2
//!   sort(arr[..mid]), sort(arr[mid..]), aux = arr, merge(aux[..mid], aux[mid..]) -> arr
//!   merge takes from the left run on ties, which makes the sort stable
//!
//!   O(n log n) time in every case, O(n) extra space.

use std::cmp::Ordering;

/// Sorted copy of `arr`.
pub fn merge_sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
    let mut out = arr.to_vec();
    merge_sort_in_place(&mut out);
    out
}

pub fn merge_sort_in_place<T: Ord + Clone>(arr: &mut [T]) {
    merge_sort_by(arr, Ord::cmp);
}

/// Stable sort of `arr` under `cmp`.
pub fn merge_sort_by<T, F>(arr: &mut [T], mut cmp: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if arr.len() <= 1 {
        return;
    }
    let mut aux = arr.to_vec();
    split_merge(arr, &mut aux, &mut cmp);
}

fn split_merge<T, F>(arr: &mut [T], aux: &mut [T], cmp: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let n = arr.len();
    if n <= 1 {
        return;
    }
    let mid = n / 2;
    split_merge(&mut arr[..mid], &mut aux[..mid], cmp);
    split_merge(&mut arr[mid..], &mut aux[mid..], cmp);
    aux.clone_from_slice(arr);
    let (left, right) = aux.split_at(mid);
    merge(left, right, arr, cmp);
}

fn merge<T, F>(left: &[T], right: &[T], out: &mut [T], cmp: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let (mut i, mut j) = (0, 0);
    for slot in out {
        let take_left = j >= right.len()
            || (i < left.len() && cmp(&left[i], &right[j]) != Ordering::Greater);
        if take_left {
            slot.clone_from(&left[i]);
            i += 1;
        } else {
            slot.clone_from(&right[j]);
            j += 1;
        }
    }
}
