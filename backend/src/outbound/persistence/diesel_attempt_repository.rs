//! PostgreSQL-backed `AttemptRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::Date;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AttemptRepository, AttemptRepositoryError};
use crate::domain::{Attempt, NewAttempt};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{AttemptRow, NewAttemptRow};
use super::pool::{DbPool, PoolError};
use super::schema::history;

/// Diesel-backed implementation of the attempt repository port.
#[derive(Clone)]
pub struct DieselAttemptRepository {
    pool: DbPool,
}

impl DieselAttemptRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AttemptRepositoryError {
    map_basic_pool_error(error, AttemptRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> AttemptRepositoryError {
    map_basic_diesel_error(
        error,
        AttemptRepositoryError::query,
        AttemptRepositoryError::connection,
    )
}

/// Convert a SQL `COUNT(*)` into the unsigned count exposed by the port.
fn row_count(raw: i64) -> Result<u64, AttemptRepositoryError> {
    u64::try_from(raw)
        .map_err(|_| AttemptRepositoryError::query(format!("negative row count: {raw}")))
}

/// UTC calendar day of `history.created_at`.
const UTC_ACTIVITY_DAY: &str = "(history.created_at AT TIME ZONE 'UTC')::date";

fn sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

#[async_trait]
impl AttemptRepository for DieselAttemptRepository {
    async fn insert(&self, attempt: &NewAttempt) -> Result<(), AttemptRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(history::table)
            .values(NewAttemptRow::from(attempt))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<Attempt>, AttemptRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<AttemptRow> = history::table
            .order((history::created_at.desc(), history::id.desc()))
            .limit(sql_limit(limit))
            .select(AttemptRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Attempt::from).collect())
    }

    async fn count(&self) -> Result<u64, AttemptRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let raw: i64 = history::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        row_count(raw)
    }

    async fn list_activity_days(&self) -> Result<Vec<NaiveDate>, AttemptRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        history::table
            .select(sql::<Date>(UTC_ACTIVITY_DAY))
            .distinct()
            .load::<NaiveDate>(&mut conn)
            .await
            .map_err(map_diesel_error)
    }
}
