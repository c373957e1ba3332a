use thiserror::Error;

/// Recoverable failure conditions shared by every container and algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgoError {
    #[error("key not found")]
    NotFound,
    #[error("container is empty")]
    EmptyContainer,
    #[error("vertex `{0}` is not in the graph")]
    VertexNotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("fib({n}) does not fit in u128")]
    Overflow { n: i64 },
}

pub type Result<T> = std::result::Result<T, AlgoError>;
