pub mod fibonacci;
pub mod knapsack;
pub mod lcs;

pub use fibonacci::fibonacci;
pub use knapsack::{KnapsackSolution, knapsack};
pub use lcs::{lcs, lcs_length, lcs_str};
