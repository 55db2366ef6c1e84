//! SQLite error classification shared by the SQLite repositories.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to [`RepositoryError`].
//! Constraint violations get semantic variants (UNIQUE to `AlreadyExists`,
//! FOREIGN KEY to `InvalidData`); everything unexpected becomes `QueryFailed`.

use super::RepositoryError;

/// Wraps a rusqlite error for use inside `tokio_rusqlite` closures.
pub fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

fn is_constraint(err: &rusqlite::Error, extended_code: i32) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(sqlite_err, _) if sqlite_err.extended_code == extended_code
    )
}

/// Maps a rusqlite error with a known ID to a RepositoryError.
///
/// # Error Mapping
///
/// - `SQLITE_CONSTRAINT_UNIQUE` / `SQLITE_CONSTRAINT_PRIMARYKEY` → `AlreadyExists`
/// - `SQLITE_CONSTRAINT_FOREIGNKEY` → `InvalidData`
/// - `CannotOpen` → `ConnectionFailed`
/// - `QueryReturnedNoRows` → `NotFound`
/// - All other errors → `QueryFailed`
pub fn map_rusqlite_error(
    err: &rusqlite::Error,
    entity_type: &'static str,
    id: &str,
) -> RepositoryError {
    if is_constraint(err, rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE)
        || is_constraint(err, rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY)
    {
        return RepositoryError::AlreadyExists {
            entity_type,
            id: id.to_string(),
        };
    }

    if is_constraint(err, rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY) {
        return RepositoryError::InvalidData(format!(
            "Foreign key constraint violation for {entity_type}"
        ));
    }

    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }
        rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
            entity_type,
            id: id.to_string(),
        },
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error with a known ID to a RepositoryError.
///
/// This is the main entry point for error mapping in async code.
pub fn map_tokio_rusqlite_error(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    let id = id.into();
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error(rusqlite_err, entity_type, &id)
        }
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::ffi;

    fn constraint_error(extended_code: i32) -> tokio_rusqlite::Error {
        let sqlite_err = ffi::Error {
            code: rusqlite::ErrorCode::ConstraintViolation,
            extended_code,
        };
        wrap_err(rusqlite::Error::SqliteFailure(sqlite_err, None))
    }

    #[test]
    fn test_unique_constraint_maps_to_already_exists() {
        let result =
            map_tokio_rusqlite_error(constraint_error(ffi::SQLITE_CONSTRAINT_UNIQUE), "Tag", "red");

        assert_eq!(
            result,
            RepositoryError::AlreadyExists {
                entity_type: "Tag",
                id: "red".to_string(),
            }
        );
    }

    #[test]
    fn test_primary_key_constraint_maps_to_already_exists() {
        let result = map_tokio_rusqlite_error(
            constraint_error(ffi::SQLITE_CONSTRAINT_PRIMARYKEY),
            "Channel",
            "sms/1",
        );

        assert!(matches!(
            result,
            RepositoryError::AlreadyExists {
                entity_type: "Channel",
                ..
            }
        ));
    }

    #[test]
    fn test_foreign_key_maps_to_invalid_data() {
        let result = map_tokio_rusqlite_error(
            constraint_error(ffi::SQLITE_CONSTRAINT_FOREIGNKEY),
            "Item",
            "shirt",
        );

        assert!(matches!(result, RepositoryError::InvalidData(_)));
    }

    #[test]
    fn test_no_rows_maps_to_not_found_with_id() {
        let err = wrap_err(rusqlite::Error::QueryReturnedNoRows);

        match map_tokio_rusqlite_error(err, "Tag", "17") {
            RepositoryError::NotFound { entity_type, id } => {
                assert_eq!(entity_type, "Tag");
                assert_eq!(id, "17");
            }
            other => panic!("Expected NotFound error, got {other:?}"),
        }
    }

    #[test]
    fn test_connection_closed_maps_to_connection_failed() {
        let result = map_tokio_rusqlite_error(tokio_rusqlite::Error::ConnectionClosed, "Tag", "1");
        assert!(matches!(result, RepositoryError::ConnectionFailed(_)));
    }

    #[test]
    fn test_other_error_maps_to_query_failed() {
        let err = tokio_rusqlite::Error::Other(Box::new(std::io::Error::other("test error")));

        let result = map_tokio_rusqlite_error(err, "Item", "1");

        assert!(matches!(result, RepositoryError::QueryFailed(_)));
    }
}
