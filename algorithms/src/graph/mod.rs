pub mod adj_list;
pub mod bfs;
pub mod dfs;
pub mod keyed;

pub use adj_list::AdjList;
pub use keyed::Graph;

use crate::error::{AlgoError, Result};

/// Reject a start vertex or neighbour index that is not below `adj.len()`.
fn check_adjacency(adj: &[Vec<usize>], start: usize) -> Result<()> {
    if start >= adj.len() {
        return Err(AlgoError::VertexNotFound(start.to_string()));
    }
    for (u, ns) in adj.iter().enumerate() {
        if let Some(&v) = ns.iter().find(|&&v| v >= adj.len()) {
            return Err(AlgoError::InvalidInput(format!(
                "vertex {u} lists neighbour {v} but only {} vertices exist",
                adj.len()
            )));
        }
    }
    Ok(())
}
