use marquee_core::error::CoreError;

/// Error type for entity and query operations.
///
/// Database constraint failures (foreign key, unique, check) are lifted into
/// [`CoreError::ConstraintViolation`] so callers match on one taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

pub type DbResult<T> = Result<T, DbError>;

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_foreign_key_violation()
                || db_err.is_unique_violation()
                || db_err.is_check_violation()
            {
                return DbError::Core(CoreError::ConstraintViolation(db_err.message().to_string()));
            }
        }
        DbError::Database(err)
    }
}
