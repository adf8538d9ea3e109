//! Builders wiring the contingent service to its driven adapters.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::info;

use backend::domain::ContingentService;
use backend::domain::ports::{ContingentRepository, ContingentWriteHook};
use backend::inbound::http::state::HttpState;
use backend::outbound::cache::RosterRefreshHook;
use backend::outbound::memory::InMemoryContingentRepository;
use backend::outbound::persistence::{DbPool, DieselContingentRepository};

use super::ServerConfig;

fn service_state<R>(repository: R, hook: Arc<dyn ContingentWriteHook>) -> HttpState
where
    R: ContingentRepository + 'static,
{
    let service = ContingentService::new(Arc::new(repository), hook, Arc::new(DefaultClock));
    HttpState::from_service(Arc::new(service))
}

fn select_store(pool: Option<&DbPool>, hook: Arc<dyn ContingentWriteHook>) -> HttpState {
    match pool {
        Some(pool) => {
            info!(store = "postgres", "contingent store selected");
            service_state(DieselContingentRepository::new(pool.clone()), hook)
        }
        None => {
            info!(store = "memory", "contingent store selected");
            service_state(InMemoryContingentRepository::new(), hook)
        }
    }
}

/// Build handler state, using PostgreSQL when the config carries a pool.
pub fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let hook: Arc<dyn ContingentWriteHook> = Arc::new(RosterRefreshHook::new());
    web::Data::new(select_store(config.db_pool.as_ref(), hook))
}

#[cfg(test)]
mod tests {
    use backend::domain::ports::{CreateContingentRequest, PageContingentsRequest};
    use backend::domain::{ContingentPayload, UserId};

    use super::*;

    #[tokio::test]
    async fn memory_store_backs_state_without_pool() {
        let hook = Arc::new(RosterRefreshHook::new());
        let state = select_store(None, hook.clone());

        let outcome = state
            .contingents
            .create(CreateContingentRequest {
                payload: ContingentPayload {
                    name: Some("Alpha".to_owned()),
                    ..ContingentPayload::default()
                },
                created_by: UserId::random(),
            })
            .await
            .expect("create succeeds");
        assert!(outcome.is_completed());

        let page = state
            .contingents_query
            .page(PageContingentsRequest::default())
            .await
            .expect("page succeeds");
        assert_eq!(page.total, 1);
        assert_eq!(hook.generation(), 1);
    }
}
