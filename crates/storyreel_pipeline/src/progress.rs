//! Observable batch progress.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// A snapshot of batch progress, published after every state change.
///
/// Progress is derived, never persisted: each snapshot is recomputed from
/// the runner's position in the scene list. `in_flight` holds the index
/// of the item currently being generated and is `Some` only strictly
/// between that item's start and its completion; at most one item is ever
/// in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchProgress {
    /// Number of items the batch will run
    pub total: usize,
    /// Items finished so far (success or failure); monotonically
    /// non-decreasing within a run
    pub completed: usize,
    /// Index of the item currently generating, if any
    pub in_flight: Option<usize>,
}

impl BatchProgress {
    /// The snapshot before any batch has started.
    pub fn idle() -> Self {
        Self {
            total: 0,
            completed: 0,
            in_flight: None,
        }
    }

    /// Create a watch channel seeded with the idle snapshot.
    pub fn channel() -> (watch::Sender<Self>, watch::Receiver<Self>) {
        watch::channel(Self::idle())
    }

    /// Whether every item has completed.
    pub fn is_done(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

impl Default for BatchProgress {
    fn default() -> Self {
        Self::idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_is_not_done() {
        assert!(!BatchProgress::idle().is_done());
    }

    #[test]
    fn done_requires_all_items_completed() {
        let progress = BatchProgress {
            total: 3,
            completed: 3,
            in_flight: None,
        };
        assert!(progress.is_done());
    }
}
