//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match the migrations exactly; regenerate with
//! `diesel print-schema` after a schema change.

diesel::table! {
    /// Users keyed by the opaque auth subject id.
    users (id) {
        id -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// One journal per user; `user_id` carries a unique constraint.
    journals (id) {
        id -> Uuid,
        user_id -> Varchar,
        title -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Dated entries. `created_at` has no database default: the service
    /// clock supplies both timestamps so the calendar-day comparison and
    /// the merge behaviour share one time source.
    journal_entries (id) {
        id -> Uuid,
        journal_id -> Uuid,
        title -> Varchar,
        text -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Shared writing prompts, not owned by any user.
    inspirations (id) {
        id -> Uuid,
        text -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(journals -> users (user_id));
diesel::joinable!(journal_entries -> journals (journal_id));

diesel::allow_tables_to_appear_in_same_query!(users, journals, journal_entries, inspirations);
