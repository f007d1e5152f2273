use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::domain::errors::DomainError;

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<DieselError> for DomainError {
    fn from(e: DieselError) -> Self {
        match e {
            DieselError::DatabaseError(kind, info) => {
                let message = info.message().to_string();
                log::debug!("database error {kind:?}: {message}");
                match kind {
                    // Constraint names stay in the log, not in the error.
                    DatabaseErrorKind::UniqueViolation => {
                        DomainError::DuplicateKey("record already exists".to_string())
                    }
                    DatabaseErrorKind::CheckViolation
                    | DatabaseErrorKind::NotNullViolation
                    | DatabaseErrorKind::ForeignKeyViolation => DomainError::Validation(message),
                    DatabaseErrorKind::ClosedConnection => DomainError::StorageUnavailable(message),
                    _ => DomainError::Internal(message),
                }
            }
            DieselError::NotFound => DomainError::NotFound,
            other => DomainError::Internal(other.to_string()),
        }
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        log::warn!("database pool checkout failed: {e}");
        DomainError::StorageUnavailable(e.to_string())
    }
}
