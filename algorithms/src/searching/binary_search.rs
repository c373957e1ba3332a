//! Binary search over a sorted slice.
//!
//! Inclusive bounds [lo, hi]; mid = lo + (hi - lo) / 2.
//! `binary_search` returns any index holding the target;
//! `binary_search_leftmost` keeps halving after a hit to find the first one.
//! Both O(log n).

use std::cmp::Ordering;

pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let (mut lo, mut hi) = (0, arr.len().checked_sub(1)?);
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        match arr[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    break;
                }
                hi = mid - 1;
            }
        }
    }
    None
}

/// First index holding `target`, if any.
pub fn binary_search_leftmost<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let (mut lo, mut hi) = (0, arr.len().checked_sub(1)?);
    let mut found = None;
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        match arr[mid].cmp(target) {
            Ordering::Less => lo = mid + 1,
            ord => {
                if ord == Ordering::Equal {
                    found = Some(mid);
                }
                if mid == 0 {
                    break;
                }
                hi = mid - 1;
            }
        }
    }
    found
}
