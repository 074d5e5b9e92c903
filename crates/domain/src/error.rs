//! Operation error taxonomy.

use thiserror::Error;

/// Failure modes of the directory operations.
///
/// `NotFound` is an informational outcome rather than a system error: the
/// store was reachable and consistent, the requested row simply is not
/// there. `InvalidQuery` is raised before the store is touched.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Connection failure: {0}")]
    ConnectionFailure(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Unexpected failure: {0}")]
    UnexpectedFailure(String),
}

impl DirectoryError {
    /// True for outcomes that report a lookup miss rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DirectoryError::NotFound(_))
    }
}

impl From<sqlx::Error> for DirectoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DirectoryError::NotFound("row not found".into()),
            sqlx::Error::Database(db_err) => {
                if let Some(code) = db_err.code() {
                    match code.as_ref() {
                        // unique_violation, foreign_key_violation
                        "23505" | "23503" => {
                            DirectoryError::ConstraintViolation(db_err.message().to_string())
                        }
                        _ => DirectoryError::UnexpectedFailure(format!("database error: {db_err}")),
                    }
                } else {
                    DirectoryError::UnexpectedFailure(format!("database error: {db_err}"))
                }
            }
            sqlx::Error::Io(e) => DirectoryError::ConnectionFailure(e.to_string()),
            sqlx::Error::Tls(e) => DirectoryError::ConnectionFailure(e.to_string()),
            sqlx::Error::PoolTimedOut => {
                DirectoryError::ConnectionFailure("timed out waiting for a connection".into())
            }
            sqlx::Error::PoolClosed => {
                DirectoryError::ConnectionFailure("connection pool is closed".into())
            }
            sqlx::Error::Configuration(e) => DirectoryError::ConnectionFailure(e.to_string()),
            other => DirectoryError::UnexpectedFailure(other.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for DirectoryError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    e.message
                        .clone()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("invalid {field}"))
                })
            })
            .collect();

        let message = if messages.len() == 1 {
            messages[0].clone()
        } else {
            format!("{} validation errors", messages.len())
        };

        DirectoryError::ConstraintViolation(message)
    }
}

impl From<validator::ValidationError> for DirectoryError {
    fn from(error: validator::ValidationError) -> Self {
        let message = error
            .message
            .clone()
            .map(|m| m.to_string())
            .unwrap_or_else(|| error.code.to_string());
        DirectoryError::ConstraintViolation(message)
    }
}
