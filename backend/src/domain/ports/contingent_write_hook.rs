//! Post-write notification port.
//!
//! Fired once after every successful contingent mutation so adapters can
//! refresh derived state such as cached rosters.

use async_trait::async_trait;

use crate::domain::ContingentWrite;

/// Receives successful contingent mutations.
///
/// Implementations must not fail the write that triggered them; anything
/// that goes wrong is theirs to log.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContingentWriteHook: Send + Sync {
    /// Called after `write` has been committed.
    async fn contingents_changed(&self, write: &ContingentWrite);
}

/// Hook that ignores every write.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpContingentWriteHook;

#[async_trait]
impl ContingentWriteHook for NoOpContingentWriteHook {
    async fn contingents_changed(&self, _write: &ContingentWrite) {}
}
