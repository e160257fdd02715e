//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the DDL in `schema_bootstrap.rs` exactly.

diesel::table! {
    /// Append-only log of validated sentences.
    history (id) {
        /// Store-assigned serial identifier.
        id -> Int4,
        word -> Varchar,
        sentence -> Text,
        score -> Float8,
        level -> Varchar,
        suggestion -> Text,
        corrected_sentence -> Text,
        /// Insert timestamp, defaulted by the database.
        created_at -> Timestamptz,
    }
}
