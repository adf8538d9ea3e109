//! PostgreSQL-backed `ContingentRepository` implementation using Diesel ORM.
//!
//! Update and delete are single conditional statements keyed by the primary
//! key, so a concurrent delete can never be overwritten by a stale update.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::Pager;
use serde_json::Value;

use crate::domain::ports::{ContingentRepository, ContingentRepositoryError};
use crate::domain::{
    Contingent, ContingentDraft, ContingentId, ContingentName, ContingentParts, NameFilter,
    NewContingent, UserId,
};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ContingentRow, ContingentUpdate, NewContingentRow};
use super::pool::{DbPool, PoolError};
use super::schema::contingents;

/// Diesel-backed implementation of the contingent repository port.
#[derive(Clone)]
pub struct DieselContingentRepository {
    pool: DbPool,
}

impl DieselContingentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ContingentRepositoryError {
    map_basic_pool_error(error, ContingentRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ContingentRepositoryError {
    map_basic_diesel_error(
        error,
        ContingentRepositoryError::query,
        ContingentRepositoryError::connection,
    )
}

/// Base query with the name filter applied.
fn filtered(filter: &NameFilter) -> contingents::BoxedQuery<'static, Pg> {
    let query = contingents::table.into_boxed();
    match filter.like_pattern() {
        Some(pattern) => query.filter(contingents::name.like(pattern).escape('\\')),
        None => query,
    }
}

fn row_to_contingent(row: ContingentRow) -> Result<Contingent, ContingentRepositoryError> {
    let ContingentRow {
        id,
        name,
        attributes,
        create_time,
        create_user_id,
    } = row;

    let name = ContingentName::new(name).map_err(|violation| {
        ContingentRepositoryError::query(format!("stored contingent {id}: {violation}"))
    })?;
    let Value::Object(attributes) = attributes else {
        return Err(ContingentRepositoryError::query(format!(
            "stored contingent {id}: attributes are not a JSON object"
        )));
    };

    Ok(Contingent::from_parts(ContingentParts {
        id: ContingentId::new(id),
        name,
        attributes,
        created_at: create_time,
        created_by: UserId::from_uuid(create_user_id),
    }))
}

fn rows_to_contingents(
    rows: Vec<ContingentRow>,
) -> Result<Vec<Contingent>, ContingentRepositoryError> {
    rows.into_iter().map(row_to_contingent).collect()
}

#[async_trait]
impl ContingentRepository for DieselContingentRepository {
    async fn page(
        &self,
        filter: &NameFilter,
        pager: Pager,
    ) -> Result<Vec<Contingent>, ContingentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = filtered(filter)
            .order(contingents::id.desc())
            .limit(pager.limit())
            .offset(pager.offset())
            .select(ContingentRow::as_select())
            .load::<ContingentRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_to_contingents(rows)
    }

    async fn count(&self, filter: &NameFilter) -> Result<u64, ContingentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let total = filtered(filter)
            .count()
            .get_result::<i64>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        u64::try_from(total)
            .map_err(|_| ContingentRepositoryError::query(format!("negative row count {total}")))
    }

    async fn list(&self, filter: &NameFilter) -> Result<Vec<Contingent>, ContingentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = filtered(filter)
            .order(contingents::id.desc())
            .select(ContingentRow::as_select())
            .load::<ContingentRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_to_contingents(rows)
    }

    async fn find_by_id(
        &self,
        id: ContingentId,
    ) -> Result<Option<Contingent>, ContingentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = contingents::table
            .find(id.get())
            .select(ContingentRow::as_select())
            .first::<ContingentRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_contingent).transpose()
    }

    async fn insert(&self, record: &NewContingent) -> Result<Contingent, ContingentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewContingentRow {
            name: record.draft.name.as_str(),
            attributes: Value::Object(record.draft.attributes.clone()),
            create_time: record.created_at,
            create_user_id: *record.created_by.as_uuid(),
        };
        let row = diesel::insert_into(contingents::table)
            .values(&new_row)
            .returning(ContingentRow::as_returning())
            .get_result::<ContingentRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        row_to_contingent(row)
    }

    async fn update(
        &self,
        id: ContingentId,
        changes: &ContingentDraft,
    ) -> Result<Option<Contingent>, ContingentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changeset = ContingentUpdate {
            name: changes.name.as_str(),
            attributes: Value::Object(changes.attributes.clone()),
        };
        let row = diesel::update(contingents::table.find(id.get()))
            .set(&changeset)
            .returning(ContingentRow::as_returning())
            .get_result::<ContingentRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_contingent).transpose()
    }

    async fn delete(&self, id: ContingentId) -> Result<bool, ContingentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let affected = diesel::delete(contingents::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(affected > 0)
    }
}
