/// First index holding `target`; works on unsorted input. O(n).
pub fn linear_search<T: PartialEq>(arr: &[T], target: &T) -> Option<usize> {
    arr.iter().position(|v| v == target)
}
