//! Unbalanced binary search tree with exclusively-owned child links.
//!
//! Variables:
//!   root : Option<Box<TreeNode<K, V>>>  — None if empty
//!   N    : usize                         — number of keys
//!   h    : usize                         — current height (longest root-to-leaf path)
//!
//! Equations:
//!   BST property: keys(left(n)) < key(n) < keys(right(n))   for every node n
//!   insert(k, v): descend by cmp; on equal key replace value in place   O(h)
//!   remove(k):
//!     leaf       -> detach
//!     one child  -> splice child into parent link
//!     two kids   -> s = min(right(n)); s replaces n; s's old link takes right(s)
//!   h <= N, so every operation degrades to O(N) on sorted insertion order.
//!
//! Every walk is iterative, so a fully skewed tree cannot exhaust the call stack.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::trace;

use crate::error::{AlgoError, Result};

type Link<K, V> = Option<Box<TreeNode<K, V>>>;

struct TreeNode<K, V> {
    key: K,
    val: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

pub struct BinarySearchTree<K, V = ()> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> BinarySearchTree<K, V> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        drop_subtree(self.root.take());
        self.len = 0;
    }

    /// Smallest key, i.e. the leftmost node.
    pub fn find_min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    pub fn find_max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// Number of nodes on the longest root-to-leaf path; 0 for an empty tree.
    pub fn height(&self) -> usize {
        let mut stack: Vec<(&TreeNode<K, V>, usize)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 1));
        }
        let mut height = 0;
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        height
    }

    /// Lazy in-order iterator over `(key, value)` pairs.
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    pub fn inorder(&self) -> Vec<&K> {
        self.iter().map(|(k, _)| k).collect()
    }

    pub fn preorder(&self) -> Vec<&K> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&TreeNode<K, V>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(&node.key);
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        out
    }

    pub fn postorder(&self) -> Vec<&K> {
        // root-right-left, reversed, is left-right-root
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&TreeNode<K, V>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(&node.key);
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        out.reverse();
        out
    }
}

impl<K: Ord, V> BinarySearchTree<K, V> {
    /// Insert `key`, or overwrite the value of an existing equal key.
    ///
    /// Returns the replaced value; the tree shape is untouched on update.
    pub fn insert(&mut self, key: K, val: V) -> Option<V> {
        let link = find_link(&mut self.root, &key);
        if let Some(node) = link {
            return Some(mem::replace(&mut node.val, val));
        }
        *link = Some(Box::new(TreeNode {
            key,
            val,
            left: None,
            right: None,
        }));
        self.len += 1;
        None
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.val),
            };
        }
        None
    }

    /// Like [`get`](Self::get), but a miss is reported as [`AlgoError::NotFound`].
    pub fn search(&self, key: &K) -> Result<&V> {
        self.get(key).ok_or(AlgoError::NotFound)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Remove `key` and return its value.
    ///
    /// A node with two children is replaced by its in-order successor, the
    /// minimum of its right subtree.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let link = find_link(&mut self.root, key);
        let target = link.take()?;
        let TreeNode {
            val, left, right, ..
        } = *target;

        *link = match (left, right) {
            (None, None) => {
                trace!("bst remove: leaf");
                None
            }
            (Some(child), None) | (None, Some(child)) => {
                trace!("bst remove: splice single child");
                Some(child)
            }
            (Some(left), Some(right)) => {
                trace!("bst remove: replace with in-order successor");
                let mut rest = Some(right);
                match take_min(&mut rest) {
                    Some(mut successor) => {
                        successor.left = Some(left);
                        successor.right = rest;
                        Some(successor)
                    }
                    None => Some(left),
                }
            }
        };
        self.len -= 1;
        Some(val)
    }

    /// Remove `key`; false when the key was absent.
    pub fn delete(&mut self, key: &K) -> bool {
        self.remove(key).is_some()
    }
}

impl<K: Ord> BinarySearchTree<K> {
    /// Key-only insert for set-like use. Returns true if the key was new.
    pub fn insert_key(&mut self, key: K) -> bool {
        self.insert(key, ()).is_none()
    }
}

/// Link where `key` lives, or the empty link where it would be attached.
fn find_link<'a, K: Ord, V>(mut link: &'a mut Link<K, V>, key: &K) -> &'a mut Link<K, V> {
    loop {
        match link.as_deref().map(|node| key.cmp(&node.key)) {
            None | Some(Ordering::Equal) => return link,
            Some(Ordering::Less) => {
                if let Some(node) = link {
                    link = &mut node.left;
                }
            }
            Some(Ordering::Greater) => {
                if let Some(node) = link {
                    link = &mut node.right;
                }
            }
        }
    }
}

/// Detach the leftmost node under `link`, splicing its right child into its place.
fn take_min<K, V>(mut link: &mut Link<K, V>) -> Link<K, V> {
    while link.as_deref().is_some_and(|node| node.left.is_some()) {
        if let Some(node) = link {
            link = &mut node.left;
        }
    }
    let mut min = link.take()?;
    *link = min.right.take();
    Some(min)
}

fn drop_subtree<K, V>(root: Link<K, V>) {
    let mut stack: Vec<Box<TreeNode<K, V>>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

impl<K, V> Drop for BinarySearchTree<K, V> {
    fn drop(&mut self) {
        drop_subtree(self.root.take());
    }
}

impl<K, V> Default for BinarySearchTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BinarySearchTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BinarySearchTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        for (k, v) in iter {
            tree.insert(k, v);
        }
        tree
    }
}

impl<'a, K, V> IntoIterator for &'a BinarySearchTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a, K, V> {
    stack: Vec<&'a TreeNode<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn push_left_spine(&mut self, mut node: Option<&'a TreeNode<K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some((&node.key, &node.val))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BinarySearchTree<i32> {
        let mut tree = BinarySearchTree::new();
        for k in [50, 30, 70, 20, 40, 60, 80] {
            tree.insert_key(k);
        }
        tree
    }

    #[test]
    fn traversals_follow_shape() {
        let tree = sample();
        assert_eq!(tree.inorder(), vec![&20, &30, &40, &50, &60, &70, &80]);
        assert_eq!(tree.preorder(), vec![&50, &30, &20, &40, &70, &60, &80]);
        assert_eq!(tree.postorder(), vec![&20, &40, &30, &60, &80, &70, &50]);
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn duplicate_insert_updates_in_place() {
        let mut tree = BinarySearchTree::new();
        assert_eq!(tree.insert(5, "a"), None);
        assert_eq!(tree.insert(3, "b"), None);
        assert_eq!(tree.insert(5, "c"), Some("a"));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.search(&5), Ok(&"c"));
        assert_eq!(tree.preorder(), vec![&5, &3]);
    }

    #[test]
    fn search_miss_is_not_found() {
        let tree = sample();
        assert_eq!(tree.search(&65), Err(AlgoError::NotFound));
        assert!(tree.contains(&60));
        assert!(!BinarySearchTree::<i32>::new().contains(&1));
    }

    #[test]
    fn remove_leaf() {
        let mut tree = sample();
        assert!(tree.delete(&20));
        assert_eq!(tree.preorder(), vec![&50, &30, &40, &70, &60, &80]);
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn remove_single_child_splices() {
        let mut tree = sample();
        tree.delete(&20);
        assert!(tree.delete(&30));
        assert_eq!(tree.preorder(), vec![&50, &40, &70, &60, &80]);
    }

    #[test]
    fn remove_two_children_uses_successor() {
        let mut tree = sample();
        assert!(tree.delete(&50));
        assert_eq!(tree.preorder(), vec![&60, &30, &20, &40, &70, &80]);

        // successor with its own right child
        let mut tree: BinarySearchTree<i32> = BinarySearchTree::new();
        for k in [10, 5, 20, 15, 30, 17] {
            tree.insert_key(k);
        }
        assert!(tree.delete(&10));
        assert_eq!(tree.preorder(), vec![&15, &5, &20, &17, &30]);
        assert_eq!(tree.inorder(), vec![&5, &15, &17, &20, &30]);
    }

    #[test]
    fn remove_missing_key_leaves_tree_intact() {
        let mut tree = sample();
        assert_eq!(tree.remove(&99), None);
        assert!(!BinarySearchTree::<i32>::new().delete(&1));
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn remove_returns_value() {
        let mut tree: BinarySearchTree<&str, u32> =
            [("b", 2), ("a", 1), ("c", 3)].into_iter().collect();
        assert_eq!(tree.remove(&"b"), Some(2));
        assert_eq!(tree.inorder(), vec![&"a", &"c"]);
    }

    #[test]
    fn min_max_on_empty_and_filled() {
        let empty: BinarySearchTree<i32> = BinarySearchTree::new();
        assert_eq!(empty.find_min(), None);
        assert_eq!(empty.find_max(), None);
        assert!(empty.inorder().is_empty());
        let tree = sample();
        assert_eq!(tree.find_min(), Some(&20));
        assert_eq!(tree.find_max(), Some(&80));
    }

    #[test]
    fn skewed_tree_does_not_recurse() {
        let mut tree = BinarySearchTree::new();
        for k in 0..5_000 {
            tree.insert_key(k);
        }
        assert_eq!(tree.height(), 5_000);
        assert_eq!(tree.iter().len(), 5_000);
        assert!(tree.delete(&0));
        assert_eq!(tree.find_min(), Some(&1));
    }
}
