//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: PostgreSQL repository via Diesel and bb8.
//! - **memory**: process-local repository used when no database is configured.
//! - **cache**: roster refresh hook fired after writes.
//!
//! Adapters translate between domain types and infrastructure
//! representations and contain no business rules.

pub mod cache;
pub mod memory;
pub mod persistence;
