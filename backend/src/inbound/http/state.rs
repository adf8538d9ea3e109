//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and depend only on the driving
//! ports, so they stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ContingentCommand, ContingentQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Contingent writes.
    pub contingents: Arc<dyn ContingentCommand>,
    /// Contingent reads.
    pub contingents_query: Arc<dyn ContingentQuery>,
}

impl HttpState {
    /// Construct state from separate command and query ports.
    pub fn new(
        contingents: Arc<dyn ContingentCommand>,
        contingents_query: Arc<dyn ContingentQuery>,
    ) -> Self {
        Self {
            contingents,
            contingents_query,
        }
    }

    /// Construct state from one service implementing both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ContingentService;
    /// use backend::domain::ports::NoOpContingentWriteHook;
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::memory::InMemoryContingentRepository;
    ///
    /// let service = ContingentService::new(
    ///     Arc::new(InMemoryContingentRepository::new()),
    ///     Arc::new(NoOpContingentWriteHook),
    ///     Arc::new(mockable::DefaultClock),
    /// );
    /// let _state = HttpState::from_service(Arc::new(service));
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: ContingentCommand + ContingentQuery + 'static,
    {
        let contingents: Arc<dyn ContingentCommand> = service.clone();
        let contingents_query: Arc<dyn ContingentQuery> = service;
        Self::new(contingents, contingents_query)
    }
}
