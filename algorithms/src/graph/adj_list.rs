//! Adjacency list over dense vertex indices.
//!
//! Variables:
//!   V       = number of vertices
//!   adj[u]  = Vec<usize> of out-neighbours of vertex u, in insertion order
//!
//! Equations:
//!   add_edge(u, v):       adj[u].push(v) unless v already in adj[u]   O(out_degree(u))
//!   add_undirected(u, v): add_edge(u, v) + add_edge(v, u)
//!   out_degree(u)       = |adj[u]|
//!
//!   The duplicate scan makes building a vertex of degree d cost O(d^2).
//!   Endpoints must satisfy u, v < V; otherwise the edge is refused.

use crate::error::{AlgoError, Result};

#[derive(Debug, Clone, Default)]
pub struct AdjList {
    adj: Vec<Vec<usize>>,
}

impl AdjList {
    /// Create a graph with `v` vertices and no edges.
    pub fn new(v: usize) -> Self {
        Self {
            adj: vec![Vec::new(); v],
        }
    }

    /// Append an isolated vertex and return its index.
    pub fn push_vertex(&mut self) -> usize {
        self.adj.push(Vec::new());
        self.adj.len() - 1
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adj.get(u).is_some_and(|n| n.contains(&v))
    }

    /// Add a directed edge u -> v. Returns false if it already existed.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<bool> {
        self.check_endpoints(u, v)?;
        Ok(self.link(u, v))
    }

    /// Add undirected edge (both directions). A self-loop is stored once.
    pub fn add_undirected(&mut self, u: usize, v: usize) -> Result<bool> {
        self.check_endpoints(u, v)?;
        Ok(self.link_undirected(u, v))
    }

    /// Out-neighbours of `u`; empty for an unknown index.
    pub fn neighbours(&self, u: usize) -> &[usize] {
        self.adj.get(u).map(Vec::as_slice).unwrap_or_default()
    }

    /// Borrow inner slice for algorithms expecting &[Vec<usize>].
    pub fn as_slice(&self) -> &[Vec<usize>] {
        &self.adj
    }

    /// Unchecked insert for callers that only hold indices from `push_vertex`.
    pub(super) fn link(&mut self, u: usize, v: usize) -> bool {
        if self.has_edge(u, v) {
            return false;
        }
        self.adj[u].push(v);
        true
    }

    pub(super) fn link_undirected(&mut self, u: usize, v: usize) -> bool {
        let added = self.link(u, v);
        if u != v {
            self.link(v, u);
        }
        added
    }

    fn check_endpoints(&self, u: usize, v: usize) -> Result<()> {
        match [u, v].into_iter().find(|&x| x >= self.adj.len()) {
            Some(bad) => Err(AlgoError::VertexNotFound(bad.to_string())),
            None => Ok(()),
        }
    }
}
