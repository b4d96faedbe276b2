//! Diesel and pool error mapping shared by every repository.
//!
//! All dormitory repository errors have the same `Connection`/`Query` shape, so
//! each adapter passes its own constructors into these helpers.

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

/// Map Diesel errors onto `query` or `connection` constructors.
///
/// Only a closed connection counts as a connection failure; everything else,
/// including constraint violations, is a query failure. Details are logged at
/// debug level and kept out of the returned message.
pub fn map_basic_diesel_error<E, Q, C>(error: diesel::result::Error, query: Q, connection: C) -> E
where
    Q: Fn(&'static str) -> E,
    C: Fn(&'static str) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => query("database error"),
        _ => query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::RoomRepositoryError;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    fn map(error: DieselError) -> RoomRepositoryError {
        map_basic_diesel_error(
            error,
            RoomRepositoryError::query,
            RoomRepositoryError::connection,
        )
    }

    #[rstest]
    fn closed_connection_is_a_connection_error() {
        let error = map(DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        ));
        assert!(matches!(error, RoomRepositoryError::Connection { .. }));
    }

    #[rstest]
    fn check_violation_is_a_query_error() {
        let error = map(DieselError::DatabaseError(
            DatabaseErrorKind::CheckViolation,
            Box::new("rooms_occupancy_check".to_owned()),
        ));
        assert!(matches!(error, RoomRepositoryError::Query { .. }));
    }

    #[rstest]
    fn pool_errors_become_connection_errors() {
        let error = map_basic_pool_error(PoolError::checkout("timed out"), |message| {
            RoomRepositoryError::connection(message)
        });
        assert_eq!(
            error,
            RoomRepositoryError::Connection {
                message: "timed out".to_owned()
            }
        );
    }
}
