//! Roster refresh adapter for the contingent write hook.
//!
//! Downstream consumers cache roster listings keyed by a generation number.
//! Each committed write bumps the generation and emits a structured
//! `roster refresh` event, which is what invalidates those caches.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tracing::info;

use crate::domain::ContingentWrite;
use crate::domain::ports::ContingentWriteHook;

/// Write hook that advances the roster generation and logs the refresh.
#[derive(Debug, Default)]
pub struct RosterRefreshHook {
    generation: AtomicU64,
}

impl RosterRefreshHook {
    /// Hook starting at generation zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of refreshes triggered so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}

#[async_trait]
impl ContingentWriteHook for RosterRefreshHook {
    async fn contingents_changed(&self, write: &ContingentWrite) {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel).wrapping_add(1);
        info!(
            kind = write.kind(),
            id = %write.id(),
            generation,
            "roster refresh"
        );
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::ContingentId;

    #[rstest]
    #[tokio::test]
    async fn each_write_advances_the_generation() {
        let hook = RosterRefreshHook::new();
        assert_eq!(hook.generation(), 0);

        hook.contingents_changed(&ContingentWrite::Created(ContingentId::new(1)))
            .await;
        hook.contingents_changed(&ContingentWrite::Deleted(ContingentId::new(1)))
            .await;

        assert_eq!(hook.generation(), 2);
    }
}
