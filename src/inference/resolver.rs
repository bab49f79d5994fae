use std::collections::HashSet;

use crate::error::ExecutionError;

/// Bump `candidate` upward until it is not in `used`.
///
/// Gives up after `max_steps` increments. Since `used` is finite, any bound
/// of at least `used.len()` always finds a free value.
pub fn resolve_collision(
    index: usize,
    candidate: i64,
    used: &HashSet<i64>,
    max_steps: usize,
) -> Result<i64, ExecutionError> {
    let mut value = candidate;
    let mut steps = 0usize;
    while used.contains(&value) {
        if steps == max_steps {
            return Err(ExecutionError::DedupExhausted {
                index,
                candidate,
                steps,
            });
        }
        value = value
            .checked_add(1)
            .ok_or(ExecutionError::ArithmeticOverflow { index })?;
        steps += 1;
    }
    Ok(value)
}
