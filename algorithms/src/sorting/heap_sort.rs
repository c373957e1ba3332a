//! In-place heap sort.
//!
//! build:   sift_down(i) for i = n/2-1 down to 0 over a max-heap   O(n)
//! extract: swap(0, end), sift_down(0) within [0, end)            O(n log n)
//!
//! O(1) extra space; not stable.

pub fn heap_sort<T: Ord>(arr: &mut [T]) {
    let len = arr.len();
    for i in (0..len / 2).rev() {
        sift_down(arr, len, i);
    }
    for end in (1..len).rev() {
        arr.swap(0, end);
        sift_down(arr, end, 0);
    }
}

/// Restore the max-heap property below `i` within `arr[..n]`.
fn sift_down<T: Ord>(arr: &mut [T], n: usize, mut i: usize) {
    loop {
        let mut largest = i;
        let l = 2 * i + 1;
        let r = 2 * i + 2;

        if l < n && arr[l] > arr[largest] {
            largest = l;
        }
        if r < n && arr[r] > arr[largest] {
            largest = r;
        }
        if largest == i {
            break;
        }
        arr.swap(i, largest);
        i = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_mixed_input() {
        let mut v = vec![64, 34, 25, 12, 22, 11, 90];
        heap_sort(&mut v);
        assert_eq!(v, vec![11, 12, 22, 25, 34, 64, 90]);
    }

    #[test]
    fn build_phase_yields_max_heap() {
        let mut v = vec![1, 5, 3, 9, 7, 2];
        let n = v.len();
        for i in (0..n / 2).rev() {
            sift_down(&mut v, n, i);
        }
        assert_eq!(v[0], 9);
        for i in 1..n {
            assert!(v[(i - 1) / 2] >= v[i]);
        }
    }

    #[test]
    fn handles_trivial_inputs() {
        let mut empty: Vec<u8> = vec![];
        heap_sort(&mut empty);
        assert!(empty.is_empty());
        let mut two = vec![2, 1];
        heap_sort(&mut two);
        assert_eq!(two, vec![1, 2]);
    }

    #[test]
    fn strings() {
        let mut v = vec!["pear", "apple", "fig", "banana"];
        heap_sort(&mut v);
        assert_eq!(v, vec!["apple", "banana", "fig", "pear"]);
    }
}
