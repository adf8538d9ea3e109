//! Process-local contingent repository.
//!
//! Backs the server when no database URL is configured and gives tests a
//! real store to run scenarios against. Ids come from a monotonically
//! increasing counter and are never reused, matching a `bigserial` column.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use pagination::Pager;

use crate::domain::ports::{ContingentRepository, ContingentRepositoryError};
use crate::domain::{
    Contingent, ContingentDraft, ContingentId, ContingentParts, NameFilter, NewContingent,
};

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    rows: BTreeMap<ContingentId, Contingent>,
}

/// In-memory implementation of [`ContingentRepository`].
#[derive(Debug, Default)]
pub struct InMemoryContingentRepository {
    store: Mutex<Store>,
}

impl InMemoryContingentRepository {
    /// Empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn matching(&self, filter: &NameFilter) -> Vec<Contingent> {
        self.lock()
            .rows
            .values()
            .rev()
            .filter(|row| filter.matches(row.name().as_str()))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ContingentRepository for InMemoryContingentRepository {
    async fn page(
        &self,
        filter: &NameFilter,
        pager: Pager,
    ) -> Result<Vec<Contingent>, ContingentRepositoryError> {
        let skip = usize::try_from(pager.offset())
            .map_err(|_| ContingentRepositoryError::query("page offset out of range"))?;
        let take = usize::try_from(pager.limit())
            .map_err(|_| ContingentRepositoryError::query("page size out of range"))?;
        Ok(self
            .matching(filter)
            .into_iter()
            .skip(skip)
            .take(take)
            .collect())
    }

    async fn count(&self, filter: &NameFilter) -> Result<u64, ContingentRepositoryError> {
        let total = self
            .lock()
            .rows
            .values()
            .filter(|row| filter.matches(row.name().as_str()))
            .count();
        u64::try_from(total).map_err(|_| ContingentRepositoryError::query("row count overflow"))
    }

    async fn list(&self, filter: &NameFilter) -> Result<Vec<Contingent>, ContingentRepositoryError> {
        Ok(self.matching(filter))
    }

    async fn find_by_id(
        &self,
        id: ContingentId,
    ) -> Result<Option<Contingent>, ContingentRepositoryError> {
        Ok(self.lock().rows.get(&id).cloned())
    }

    async fn insert(&self, record: &NewContingent) -> Result<Contingent, ContingentRepositoryError> {
        let mut store = self.lock();
        let next = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| ContingentRepositoryError::query("contingent id sequence exhausted"))?;
        store.last_id = next;
        let id = ContingentId::new(next);
        let contingent = Contingent::from_parts(ContingentParts {
            id,
            name: record.draft.name.clone(),
            attributes: record.draft.attributes.clone(),
            created_at: record.created_at,
            created_by: record.created_by,
        });
        store.rows.insert(id, contingent.clone());
        Ok(contingent)
    }

    async fn update(
        &self,
        id: ContingentId,
        changes: &ContingentDraft,
    ) -> Result<Option<Contingent>, ContingentRepositoryError> {
        let mut store = self.lock();
        Ok(store.rows.get_mut(&id).map(|row| {
            row.apply(changes.clone());
            row.clone()
        }))
    }

    async fn delete(&self, id: ContingentId) -> Result<bool, ContingentRepositoryError> {
        Ok(self.lock().rows.remove(&id).is_some())
    }
}
