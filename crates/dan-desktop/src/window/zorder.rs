//! Stacking counter

use serde::{Deserialize, Serialize};

/// First value handed out is `INITIAL_Z_INDEX + 1`
pub const INITIAL_Z_INDEX: u32 = 100;

/// Monotonic stacking counter.
///
/// Values are never reclaimed, even when windows close, so two windows can
/// never end up tied after a deletion. Assignment takes `&mut self`, which
/// makes each value unique for the lifetime of the counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZOrder {
    max: u32,
}

impl Default for ZOrder {
    fn default() -> Self {
        Self::new()
    }
}

impl ZOrder {
    /// Create a counter starting at [`INITIAL_Z_INDEX`]
    pub const fn new() -> Self {
        Self { max: INITIAL_Z_INDEX }
    }

    /// Resume a counter from a persisted value
    pub const fn resume(max: u32) -> Self {
        Self { max }
    }

    /// Highest value handed out so far
    #[inline]
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Hand out the next stacking value
    #[inline]
    pub fn next(&mut self) -> u32 {
        self.max = self.max.saturating_add(1);
        self.max
    }

    /// Make sure the counter is at least `seen`
    #[inline]
    pub fn observe(&mut self, seen: u32) {
        self.max = self.max.max(seen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_is_strictly_increasing() {
        let mut z = ZOrder::new();
        let a = z.next();
        let b = z.next();
        assert_eq!(a, INITIAL_Z_INDEX + 1);
        assert!(b > a);
        assert_eq!(z.max(), b);
    }

    #[test]
    fn test_observe_never_decrements() {
        let mut z = ZOrder::resume(500);
        z.observe(10);
        assert_eq!(z.max(), 500);
        z.observe(900);
        assert_eq!(z.next(), 901);
    }
}
