use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use marquee_core::error::CoreError;
use marquee_db::DbError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`sqlx::Error`] for raw
/// database failures.
///
/// Not-found errors produce a bare 404 with an empty body; everything else
/// produces a `{ "error", "code" }` JSON body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `marquee_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A resource with no single id is absent (e.g. an empty catalog).
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Core(core) => AppError::Core(core),
            DbError::Database(db) => AppError::Database(db),
        }
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id, "Entity not found");
                return StatusCode::NOT_FOUND.into_response();
            }
            AppError::NotFound(what) => {
                tracing::debug!(what = %what, "Resource not found");
                return StatusCode::NOT_FOUND.into_response();
            }

            // --- Remaining CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::ConstraintViolation(msg) => (
                    StatusCode::CONFLICT,
                    "CONSTRAINT_VIOLATION",
                    msg.clone(),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::IncompleteEntity { .. } => {
                    tracing::error!(error = %core, "Incomplete entity");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INCOMPLETE_ENTITY",
                        "The requested record is incomplete".to_string(),
                    )
                }
                CoreError::NotFound { .. } | CoreError::Internal(_) => {
                    tracing::error!(error = %core, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => match classify_sqlx_error(err) {
                Some(classified) => classified,
                None => return StatusCode::NOT_FOUND.into_response(),
            },
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to `None` (a bare 404).
/// - Unique, foreign key, and check violations map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> Option<(StatusCode, &'static str, String)> {
    match err {
        sqlx::Error::RowNotFound => None,
        sqlx::Error::Database(db_err)
            if db_err.is_unique_violation()
                || db_err.is_foreign_key_violation()
                || db_err.is_check_violation() =>
        {
            Some((
                StatusCode::CONFLICT,
                "CONSTRAINT_VIOLATION",
                db_err.message().to_string(),
            ))
        }
        other => {
            tracing::error!(error = %other, "Database error");
            Some((
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ))
        }
    }
}
