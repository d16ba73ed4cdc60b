//! Sizing for per-step cost histories.

/// Most entries reserved up front; longer runs grow the buffer as they go.
pub(crate) const MAX_RESERVED: usize = 1 << 16;

/// Initial capacity for a history holding the start value plus one entry
/// per step.
pub(crate) fn history_capacity(steps: usize) -> usize {
    steps.saturating_add(1).min(MAX_RESERVED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_budget_reserved_exactly() {
        assert_eq!(history_capacity(0), 1);
        assert_eq!(history_capacity(1000), 1001);
    }

    #[test]
    fn test_huge_budget_is_capped() {
        assert_eq!(history_capacity(usize::MAX), MAX_RESERVED);
        assert_eq!(history_capacity(usize::MAX / 4), MAX_RESERVED);
        assert_eq!(history_capacity(1_000_000_000), MAX_RESERVED);
        let buffer: Vec<f64> = Vec::with_capacity(history_capacity(usize::MAX / 4));
        assert!(buffer.capacity() >= MAX_RESERVED);
    }
}
