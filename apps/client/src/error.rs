//! # API Error Type
//!
//! Unified error type for client commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront Client                  │
//! │                                                                         │
//! │  Command Function → Result<T, ApiError>                                 │
//! │         │                                                               │
//! │         ├── CatalogError::Status(404) ─────────► NOT_FOUND              │
//! │         ├── CatalogError (other) ──────────────► CATALOG_ERROR          │
//! │         ├── ValidationError ───────────────────► VALIDATION_ERROR       │
//! │         ├── StoreError / DbError ──────────────► DATABASE_ERROR         │
//! │         ├── ConfigError ───────────────────────► CONFIG_ERROR           │
//! │         └── anything else ─────────────────────► INTERNAL               │
//! │                                                                         │
//! │  The CLI prints the error as JSON on stderr:                            │
//! │    {"code":"NOT_FOUND","message":"Failed to fetch product (HTTP 404)"}  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_core::{CoreError, ValidationError};
use storefront_db::DbError;
use ts_rs::TS;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::state::StoreError;

/// Error returned from client commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Failed to fetch product (HTTP 404)"
/// }
/// ```
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Catalog resource does not exist
    NotFound,

    /// Input rejected before doing any work
    ValidationError,

    /// Durable store failed
    DatabaseError,

    /// Catalog API unreachable or misbehaving
    CatalogError,

    /// Configuration missing or invalid
    ConfigError,

    /// Anything else
    Internal,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation(e) => e.into(),
            e @ CatalogError::InvalidUrl(_) => ApiError::new(ErrorCode::ConfigError, e.to_string()),
            e if e.is_not_found() => ApiError::new(ErrorCode::NotFound, e.to_string()),
            e => ApiError::new(ErrorCode::CatalogError, e.to_string()),
        }
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConnectionFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::QueryFailed(e) | DbError::Internal(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database operation failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => e.into(),
            other => ApiError::internal(other.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Storage(e) => e.into(),
            StoreError::Snapshot(e) => {
                tracing::error!("Cart snapshot encoding failed: {}", e);
                ApiError::internal("Failed to encode cart")
            }
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::internal(format!("JSON serialization failed: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_status_mapping() {
        let not_found: ApiError = CatalogError::Status {
            resource: "product",
            status: 404,
        }
        .into();
        assert_eq!(not_found.code, ErrorCode::NotFound);

        let down: ApiError = CatalogError::Status {
            resource: "products",
            status: 500,
        }
        .into();
        assert_eq!(down.code, ErrorCode::CatalogError);
        assert_eq!(down.message, "Failed to fetch products (HTTP 500)");
    }

    #[test]
    fn test_validation_mapping() {
        let err: ApiError = CatalogError::Validation(ValidationError::Required {
            field: "product".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_store_error_hides_details() {
        let err: ApiError = StoreError::Storage(DbError::QueryFailed("disk I/O".into())).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Database operation failed");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_string(&ApiError::validation("bad id")).unwrap();
        assert_eq!(json, r#"{"code":"VALIDATION_ERROR","message":"bad id"}"#);
    }
}
