//! Graph keyed by caller-chosen vertex identifiers.
//!
//! Variables:
//!   index    : HashMap<V, usize>  — identifier -> dense vertex index
//!   vertices : Vec<V>             — dense index -> identifier, insertion order
//!   adj      : AdjList            — out-neighbours per dense index
//!
//! Equations:
//!   add_edge(a, b):  adj[i(a)] += i(b);  undirected also adj[i(b)] += i(a)
//!   undirected invariant: b in adj[a]  <=>  a in adj[b]
//!   bfs / dfs:       run over adj, mapped back through `vertices`   O(V+E)

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use super::adj_list::AdjList;
use super::{bfs, dfs};
use crate::error::{AlgoError, Result};

#[derive(Debug, Clone)]
pub struct Graph<V> {
    directed: bool,
    index: HashMap<V, usize>,
    vertices: Vec<V>,
    adj: AdjList,
    edges: usize,
}

impl<V: Eq + Hash + Clone + Debug> Graph<V> {
    pub fn directed() -> Self {
        Self::with_direction(true)
    }

    pub fn undirected() -> Self {
        Self::with_direction(false)
    }

    fn with_direction(directed: bool) -> Self {
        Self {
            directed,
            index: HashMap::new(),
            vertices: Vec::new(),
            adj: AdjList::default(),
            edges: 0,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns true if the vertex was not present before.
    pub fn add_vertex(&mut self, id: V) -> bool {
        if self.index.contains_key(&id) {
            return false;
        }
        self.intern(id);
        true
    }

    /// Connect `a` to `b`, creating either endpoint if missing.
    ///
    /// Repeated edges are ignored. Returns true if a new edge was stored.
    pub fn add_edge(&mut self, a: V, b: V) -> bool {
        let u = self.intern(a);
        let v = self.intern(b);
        let added = if self.directed {
            self.adj.link(u, v)
        } else {
            self.adj.link_undirected(u, v)
        };
        if added {
            self.edges += 1;
        }
        added
    }

    pub fn has_vertex(&self, id: &V) -> bool {
        self.index.contains_key(id)
    }

    pub fn has_edge(&self, a: &V, b: &V) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&u), Some(&v)) => self.adj.has_edge(u, v),
            _ => false,
        }
    }

    /// Adjacent vertices of `id` in the order their edges were added.
    pub fn neighbors(&self, id: &V) -> Result<Vec<&V>> {
        let u = self.lookup(id)?;
        Ok(self.resolve(self.adj.neighbours(u)))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Logical edge count; an undirected edge counts once.
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    pub fn bfs(&self, start: &V) -> Result<Vec<&V>> {
        let s = self.lookup(start)?;
        debug!(start = ?start, vertices = self.vertex_count(), "graph bfs");
        Ok(self.resolve(&bfs::bfs(self.adj.as_slice(), s)?))
    }

    pub fn dfs(&self, start: &V) -> Result<Vec<&V>> {
        let s = self.lookup(start)?;
        debug!(start = ?start, vertices = self.vertex_count(), "graph dfs");
        Ok(self.resolve(&dfs::dfs(self.adj.as_slice(), s)?))
    }

    /// Whether `to` is reachable from `from` (every vertex reaches itself).
    pub fn has_path(&self, from: &V, to: &V) -> Result<bool> {
        let s = self.lookup(from)?;
        let t = self.lookup(to)?;
        Ok(bfs::bfs(self.adj.as_slice(), s)?.contains(&t))
    }

    fn intern(&mut self, id: V) -> usize {
        if let Some(&i) = self.index.get(&id) {
            return i;
        }
        let i = self.adj.push_vertex();
        self.index.insert(id.clone(), i);
        self.vertices.push(id);
        i
    }

    fn lookup(&self, id: &V) -> Result<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| AlgoError::VertexNotFound(format!("{id:?}")))
    }

    fn resolve(&self, indices: &[usize]) -> Vec<&V> {
        indices.iter().map(|&i| &self.vertices[i]).collect()
    }
}

impl<V: Eq + Hash + Clone + Debug> Default for Graph<V> {
    fn default() -> Self {
        Self::undirected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond(directed: bool) -> Graph<&'static str> {
        let mut g = if directed {
            Graph::directed()
        } else {
            Graph::undirected()
        };
        for (a, b) in [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")] {
            g.add_edge(a, b);
        }
        g
    }

    #[test]
    fn bfs_respects_adjacency_order() {
        let g = diamond(true);
        assert_eq!(g.bfs(&"A").unwrap(), vec![&"A", &"B", &"C", &"D"]);
        let g = diamond(false);
        assert_eq!(g.bfs(&"A").unwrap(), vec![&"A", &"B", &"C", &"D"]);
        assert_eq!(g.bfs(&"D").unwrap(), vec![&"D", &"B", &"C", &"A"]);
    }

    #[test]
    fn dfs_goes_deep_first() {
        let g = diamond(true);
        assert_eq!(g.dfs(&"A").unwrap(), vec![&"A", &"B", &"D", &"C"]);
        let g = diamond(false);
        assert_eq!(g.dfs(&"C").unwrap(), vec![&"C", &"A", &"B", &"D"]);
    }

    #[test]
    fn directed_edges_are_one_way() {
        let mut g = Graph::directed();
        g.add_edge('A', 'B');
        assert!(g.has_edge(&'A', &'B'));
        assert!(!g.has_edge(&'B', &'A'));
        assert_eq!(g.neighbors(&'B').unwrap(), Vec::<&char>::new());
        assert!(g.has_path(&'A', &'B').unwrap());
        assert!(!g.has_path(&'B', &'A').unwrap());
    }

    #[test]
    fn undirected_edges_are_symmetric() {
        let mut g = Graph::undirected();
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        assert!(!g.add_edge(2, 1));
        assert_eq!(g.neighbors(&2).unwrap(), vec![&1, &3]);
        assert_eq!(g.edge_count(), 2);
        assert!(g.has_path(&3, &1).unwrap());
    }

    #[test]
    fn missing_vertex_is_reported() {
        let g = diamond(true);
        assert_eq!(
            g.bfs(&"Z"),
            Err(AlgoError::VertexNotFound("\"Z\"".to_string()))
        );
        assert!(matches!(g.dfs(&"Z"), Err(AlgoError::VertexNotFound(_))));
        assert!(g.neighbors(&"Z").is_err());
        assert!(g.has_path(&"A", &"Z").is_err());
    }

    #[test]
    fn isolated_vertex_visits_only_itself() {
        let mut g = diamond(false);
        assert!(g.add_vertex("E"));
        assert!(!g.add_vertex("E"));
        assert_eq!(g.bfs(&"E").unwrap(), vec![&"E"]);
        assert_eq!(g.vertex_count(), 5);
        assert_eq!(
            g.vertices().copied().collect::<Vec<_>>(),
            vec!["A", "B", "C", "D", "E"]
        );
    }
}
