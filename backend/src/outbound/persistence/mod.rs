//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories translate between Diesel row structs and domain types and
//! hold no business logic. Connections come from a `bb8` pool through
//! `diesel-async`; every database error is mapped onto the port's error type.
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, DieselContingentRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/roster")).await?;
//! let repo = DieselContingentRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_contingent_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_contingent_repository::DieselContingentRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
