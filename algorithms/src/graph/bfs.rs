use std::collections::VecDeque;

use tracing::trace;

use super::check_adjacency;
use crate::error::Result;

/// Breadth-first order from `start`.
///
/// Vertices are marked when enqueued, so each is queued at most once.
/// Same-distance vertices keep adjacency-list order.
/// Fails with `VertexNotFound` for a bad `start` and `InvalidInput` when any
/// neighbour index is out of range.
pub fn bfs(adj: &[Vec<usize>], start: usize) -> Result<Vec<usize>> {
    check_adjacency(adj, start)?;
    let mut visited = vec![false; adj.len()];
    let mut queue = VecDeque::new();
    let mut order = Vec::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for &n in &adj[node] {
            if !visited[n] {
                visited[n] = true;
                queue.push_back(n);
            }
        }
    }
    trace!(start, visited = order.len(), "bfs finished");
    Ok(order)
}
