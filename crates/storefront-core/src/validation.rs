//! # Validation Module
//!
//! Input validation for identifiers coming from users or the command line.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Command layer / CLI arguments                                │
//! │  └── THIS MODULE: reject empty or malformed ids early                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Catalog API                                                  │
//! │  └── Unknown ids come back as non-success responses                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart rules                                                   │
//! │  └── Exact id comparison, no normalization                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validators only accept or reject. They never trim or rewrite an id,
//! because the cart compares ids byte for byte.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest identifier accepted from user input.
pub const MAX_ID_LENGTH: usize = 128;

/// Validates a catalog identifier (product, category, billboard, ...).
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - At most [`MAX_ID_LENGTH`] characters
/// - No control characters and no `/` (ids become URL path segments)
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_id;
///
/// assert!(validate_id("product", "6429a649-7a27-446e-bf74-6009eefc7187").is_ok());
/// assert!(validate_id("product", "").is_err());
/// assert!(validate_id("product", "a/b").is_err());
/// ```
pub fn validate_id(field: &str, id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if id.chars().count() > MAX_ID_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_ID_LENGTH,
        });
    }

    if id.chars().any(|c| c.is_control() || c == '/') {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must not contain control characters or '/'".to_string(),
        });
    }

    Ok(())
}
