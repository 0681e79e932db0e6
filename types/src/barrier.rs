//! Two-flag join barrier gating the reveal sequence.

/// Tracks the minimum-loader timer and the background-asset load.
///
/// Both flags are monotonic: each is set at most once and never reset for
/// the lifetime of the app instance. The barrier is evaluated explicitly
/// after every flag update; the reveal must not begin until `is_open()`,
/// regardless of which side resolves first.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadBarrier {
    min_elapsed: bool,
    asset_ready: bool,
}

impl LoadBarrier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the minimum loader duration as elapsed. Idempotent.
    pub fn set_min_elapsed(&mut self) {
        self.min_elapsed = true;
    }

    /// Mark the background asset as loaded. Idempotent.
    pub fn set_asset_ready(&mut self) {
        self.asset_ready = true;
    }

    #[must_use]
    pub fn min_elapsed(&self) -> bool {
        self.min_elapsed
    }

    #[must_use]
    pub fn asset_ready(&self) -> bool {
        self.asset_ready
    }

    /// True once both sides of the join have fired.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.min_elapsed && self.asset_ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_until_both_flags() {
        let mut barrier = LoadBarrier::new();
        assert!(!barrier.is_open());
        barrier.set_min_elapsed();
        assert!(!barrier.is_open());
        barrier.set_asset_ready();
        assert!(barrier.is_open());
    }

    #[test]
    fn order_does_not_matter() {
        let mut barrier = LoadBarrier::new();
        barrier.set_asset_ready();
        assert!(!barrier.is_open());
        barrier.set_min_elapsed();
        assert!(barrier.is_open());
    }

    #[test]
    fn setters_are_idempotent() {
        let mut barrier = LoadBarrier::new();
        barrier.set_min_elapsed();
        barrier.set_min_elapsed();
        barrier.set_asset_ready();
        barrier.set_asset_ready();
        assert!(barrier.is_open());
    }
}
