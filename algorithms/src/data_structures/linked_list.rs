//! Doubly-linked list with nodes held in a slab arena.
//!
//! Variables:
//!   nodes : Slab<Node<T>>  — arena of nodes; vacated keys are recycled by the slab
//!   head  : Option<usize>  — key of the first node, None if empty
//!   tail  : Option<usize>  — key of the last node, None if empty
//!   N     : usize          — number of nodes = nodes.len()
//!
//! Equations:
//!   append(x):  k = alloc(x),  nodes[tail].next = k,  tail = k        O(1)
//!   prepend(x): k = alloc(x),  nodes[head].prev = k,  head = k        O(1)
//!   find(x):    min { p | value at position p == x }                  O(N)
//!   delete(x):  unlink node at find(x), free its key                  O(N)
//!
//!   Walking `next` from head reaches tail in exactly N-1 steps.
//!   `prev` links are lookup-only and never decide when a node is freed.

use std::fmt;
use std::iter::FusedIterator;

use slab::Slab;
use tracing::trace;

struct Node<T> {
    val: T,
    prev: Option<usize>,
    next: Option<usize>,
}

pub struct LinkedList<T> {
    nodes: Slab<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: None,
            tail: None,
        }
    }

    /// Insert at the tail.
    pub fn append(&mut self, val: T) {
        let key = self.nodes.insert(Node {
            val,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(t) => self.nodes[t].next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);
    }

    /// Insert at the head.
    pub fn prepend(&mut self, val: T) {
        let key = self.nodes.insert(Node {
            val,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(h) => self.nodes[h].prev = Some(key),
            None => self.tail = Some(key),
        }
        self.head = Some(key);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let key = self.head?;
        Some(self.unlink(key))
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let key = self.tail?;
        Some(self.unlink(key))
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|k| &self.nodes[k].val)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|k| &self.nodes[k].val)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Front-to-back iterator. Restartable: every call begins at the head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.nodes.len(),
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    fn unlink(&mut self, key: usize) -> T {
        let node = self.nodes.remove(key);
        match node.prev {
            Some(p) => self.nodes[p].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => self.nodes[n].prev = node.prev,
            None => self.tail = node.prev,
        }
        node.val
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Position of the first node holding `val`.
    pub fn find(&self, val: &T) -> Option<usize> {
        self.locate(val).map(|(pos, _)| pos)
    }

    pub fn contains(&self, val: &T) -> bool {
        self.locate(val).is_some()
    }

    /// Remove the first node holding `val`. Returns false when absent.
    pub fn delete(&mut self, val: &T) -> bool {
        match self.locate(val) {
            Some((pos, key)) => {
                trace!(position = pos, "unlinking list node");
                self.unlink(key);
                true
            }
            None => false,
        }
    }

    fn locate(&self, val: &T) -> Option<(usize, usize)> {
        let mut cur = self.head;
        let mut pos = 0;
        while let Some(k) = cur {
            let node = &self.nodes[k];
            if node.val == *val {
                return Some((pos, k));
            }
            cur = node.next;
            pos += 1;
        }
        None
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for val in iter {
            self.append(val);
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.val)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.back?];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.val)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
