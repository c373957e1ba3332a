use tracing::trace;

use super::check_adjacency;
use crate::error::Result;

/// Depth-first preorder from `start`.
///
/// Uses an explicit stack; neighbours are pushed in reverse so the order
/// matches the recursive left-to-right walk.
/// Fails with `VertexNotFound` for a bad `start` and `InvalidInput` when any
/// neighbour index is out of range.
pub fn dfs(adj: &[Vec<usize>], start: usize) -> Result<Vec<usize>> {
    check_adjacency(adj, start)?;
    let mut visited = vec![false; adj.len()];
    let mut stack = vec![start];
    let mut order = Vec::new();

    while let Some(node) = stack.pop() {
        if visited[node] {
            continue;
        }
        visited[node] = true;
        order.push(node);
        for &n in adj[node].iter().rev() {
            if !visited[n] {
                stack.push(n);
            }
        }
    }
    trace!(start, visited = order.len(), "dfs finished");
    Ok(order)
}
