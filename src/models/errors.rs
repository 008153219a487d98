use thiserror::Error;

use super::ServiceCategory;

/// Service-level errors surfaced by the cart boundary
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("No active order session; start a session before using the cart")]
    SessionNotStarted,

    #[error("Cart item not found: item_id={item_id}, category={category}")]
    ItemNotFound {
        item_id: String,
        category: ServiceCategory,
    },

    #[error("Catalog item not found: item_id={item_id}, category={category}")]
    CatalogItemNotFound {
        item_id: String,
        category: ServiceCategory,
    },

    #[error("Cannot check out an empty cart")]
    EmptyCart,

    #[error("Validation error: {message}")]
    Validation { message: String },
}

/// Validation errors for input data
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    RequiredField { field: String },

    #[error("Invalid field value: {field}={value}, reason={reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Field too long: {field}, max_length={max_length}, actual_length={actual_length}")]
    TooLong {
        field: String,
        max_length: usize,
        actual_length: usize,
    },

    #[error("Value out of range: {field}, min={min}, max={max}, value={value}")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
        value: String,
    },
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::Validation {
            message: err.to_string(),
        }
    }
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Result type alias for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;
