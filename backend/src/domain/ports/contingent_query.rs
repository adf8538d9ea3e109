//! Driving port for contingent reads.

use async_trait::async_trait;
use pagination::Pager;

use crate::domain::{Contingent, ContingentId, ContingentPage, Error, NameFilter};

/// Request for one window of contingents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContingentsRequest {
    /// Name filter; blank matches everything.
    pub filter: NameFilter,
    /// Requested window.
    pub pager: Pager,
}

/// Driving port for contingent read operations.
///
/// # Examples
///
/// ```rust,no_run
/// # use std::sync::Arc;
/// # use backend::domain::{ContingentService, NameFilter};
/// # use backend::domain::ports::{ContingentQuery, NoOpContingentWriteHook};
/// # use backend::outbound::memory::InMemoryContingentRepository;
/// # async fn example() -> Result<(), backend::domain::Error> {
/// let service = ContingentService::new(
///     Arc::new(InMemoryContingentRepository::default()),
///     Arc::new(NoOpContingentWriteHook),
///     Arc::new(mockable::DefaultClock),
/// );
/// let all = service.list(NameFilter::all()).await?;
/// assert!(all.is_empty());
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContingentQuery: Send + Sync {
    /// Read a window of matching records plus the total match count.
    async fn page(&self, request: PageContingentsRequest) -> Result<ContingentPage, Error>;

    /// Read every matching record.
    async fn list(&self, filter: NameFilter) -> Result<Vec<Contingent>, Error>;

    /// Read one record; `None` when absent.
    async fn get(&self, id: ContingentId) -> Result<Option<Contingent>, Error>;
}
