//! Internal Diesel row structs for the `contingents` table.
//!
//! These never leave the persistence layer.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::contingents;

/// Row read back from `contingents`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contingents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ContingentRow {
    pub id: i64,
    pub name: String,
    pub attributes: serde_json::Value,
    pub create_time: DateTime<Utc>,
    pub create_user_id: Uuid,
}

/// Insert payload; `id` comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contingents)]
pub(crate) struct NewContingentRow<'a> {
    pub name: &'a str,
    pub attributes: serde_json::Value,
    pub create_time: DateTime<Utc>,
    pub create_user_id: Uuid,
}

/// Changeset for updates; audit columns are write-once.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = contingents)]
pub(crate) struct ContingentUpdate<'a> {
    pub name: &'a str,
    pub attributes: serde_json::Value,
}
