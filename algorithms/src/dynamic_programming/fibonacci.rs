use crate::error::{AlgoError, Result};

/// Largest index whose Fibonacci number fits in `u128`.
pub const MAX_FIB_INDEX: i64 = 186;

/// fib(0) = 0, fib(1) = 1, fib(n) = fib(n-1) + fib(n-2).
///
/// Two rolling accumulators: O(n) time, O(1) space.
pub fn fibonacci(n: i64) -> Result<u128> {
    if n < 0 {
        return Err(AlgoError::InvalidInput(format!(
            "fibonacci index must be non-negative, got {n}"
        )));
    }
    if n == 0 {
        return Ok(0);
    }
    let (mut prev, mut curr) = (0u128, 1u128);
    for _ in 2..=n {
        let next = prev.checked_add(curr).ok_or(AlgoError::Overflow { n })?;
        prev = curr;
        curr = next;
    }
    Ok(curr)
}
