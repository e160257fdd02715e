//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{Attempt, NewAttempt};

use super::schema::history;

/// Row struct for reading from the history table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = history)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AttemptRow {
    pub id: i32,
    pub word: String,
    pub sentence: String,
    pub score: f64,
    pub level: String,
    pub suggestion: String,
    pub corrected_sentence: String,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for appending history records.
///
/// `id` and `created_at` are assigned by the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = history)]
pub(crate) struct NewAttemptRow<'a> {
    pub word: &'a str,
    pub sentence: &'a str,
    pub score: f64,
    pub level: &'a str,
    pub suggestion: &'a str,
    pub corrected_sentence: &'a str,
}

impl<'a> From<&'a NewAttempt> for NewAttemptRow<'a> {
    fn from(attempt: &'a NewAttempt) -> Self {
        Self {
            word: &attempt.word,
            sentence: &attempt.sentence,
            score: attempt.score,
            level: &attempt.level,
            suggestion: &attempt.suggestion,
            corrected_sentence: &attempt.corrected_sentence,
        }
    }
}

impl From<AttemptRow> for Attempt {
    fn from(row: AttemptRow) -> Self {
        let AttemptRow {
            id,
            word,
            sentence,
            score,
            level,
            suggestion,
            corrected_sentence,
            created_at,
        } = row;
        Self {
            id,
            word,
            sentence,
            score,
            level,
            suggestion,
            corrected_sentence,
            created_at,
        }
    }
}
