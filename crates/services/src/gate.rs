//! Stale-response filtering for overlapping backend calls.
//!
//! Nothing prevents a second `/ask` from being issued while the first is in
//! flight, and responses may resolve in either order. Each outgoing request
//! takes a monotonically increasing sequence number from the gate; a
//! response is only applied when its number is still the latest issued, so
//! the answer on screen always belongs to the most recent question.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct ResponseGate {
    issued: AtomicU64,
}

impl ResponseGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags a new outgoing request and invalidates every earlier one.
    pub fn issue(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// True when a response tagged `seq` is still the latest issued and may
    /// be applied to shared state.
    #[must_use]
    pub fn admit(&self, seq: u64) -> bool {
        self.issued.load(Ordering::Acquire) == seq
    }
}
