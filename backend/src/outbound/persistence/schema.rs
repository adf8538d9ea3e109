//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Team rosters.
    contingents (id) {
        /// Store-assigned primary key.
        id -> Int8,
        /// Searchable label, at most 64 characters.
        #[max_length = 64]
        name -> Varchar,
        /// Opaque attributes; always a JSON object.
        attributes -> Jsonb,
        /// Creation timestamp, written once.
        create_time -> Timestamptz,
        /// Creating principal, written once.
        create_user_id -> Uuid,
    }
}
