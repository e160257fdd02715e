//! Shared Diesel error mapping for repositories with basic query semantics.

use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error constructor.
pub fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Map Diesel errors into query/connection constructors.
///
/// Only a closed connection counts as a connection failure. The database's
/// own message is carried into the returned error.
pub fn map_basic_diesel_error<E, Q, C>(error: diesel::result::Error, query: Q, connection: C) -> E
where
    Q: FnOnce(String) -> E,
    C: FnOnce(String) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match error {
        DieselError::NotFound => query("record not found".to_owned()),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            debug!(message = info.message(), "history store connection closed");
            connection(info.message().to_owned())
        }
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
            query(info.message().to_owned())
        }
        other => query(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    use super::*;

    #[derive(Debug, PartialEq)]
    enum Mapped {
        Query(String),
        Connection(String),
    }

    fn db_error(kind: DatabaseErrorKind, message: &str) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(message.to_owned()))
    }

    #[rstest]
    #[case::closed(
        db_error(DatabaseErrorKind::ClosedConnection, "server closed the connection"),
        Mapped::Connection("server closed the connection".to_owned())
    )]
    #[case::not_null(
        db_error(DatabaseErrorKind::NotNullViolation, "null value in column \"word\""),
        Mapped::Query("null value in column \"word\"".to_owned())
    )]
    #[case::too_long(
        db_error(
            DatabaseErrorKind::Unknown,
            "value too long for type character varying(255)"
        ),
        Mapped::Query("value too long for type character varying(255)".to_owned())
    )]
    #[case::not_found(DieselError::NotFound, Mapped::Query("record not found".to_owned()))]
    fn database_message_survives_mapping(#[case] error: DieselError, #[case] expected: Mapped) {
        assert_eq!(
            map_basic_diesel_error(error, Mapped::Query, Mapped::Connection),
            expected
        );
    }

    #[rstest]
    fn pool_message_is_forwarded() {
        let mapped = map_basic_pool_error(PoolError::build("bad url"), |message| message);
        assert_eq!(mapped, "bad url");
    }
}
