use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod orders;

/// Failures surfaced to callers of the service layer. Every business-rule
/// variant maps to a 4xx response; `Internal` is the only 5xx.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed or missing request fields; raised before any read.
    #[error("{0}")]
    Validation(String),
    #[error("rental start date must be strictly before the end date")]
    InvalidDateRange,
    #[error("a delivery address is required for courier delivery")]
    AddressRequired,
    #[error("one or more requested products do not exist or are inactive")]
    ProductNotFound,
    #[error("rental duration must be at least one day")]
    MinimumRentalDuration,
    #[error("not enough stock for product {product_id} in the requested period")]
    InsufficientStock { product_id: i32 },
    #[error("order not found")]
    NotFound,
    #[error("internal error")]
    Internal(#[source] RepositoryError),
}

impl ServiceError {
    /// Stable machine-readable code included in failure responses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::InvalidDateRange => "invalid_date_range",
            Self::AddressRequired => "address_required",
            Self::ProductNotFound => "product_not_found",
            Self::MinimumRentalDuration => "minimum_rental_duration",
            Self::InsufficientStock { .. } => "insufficient_stock",
            Self::NotFound => "not_found",
            Self::Internal(_) => "internal_error",
        }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound,
            RepositoryError::StockConflict { product_id } => Self::InsufficientStock { product_id },
            other => Self::Internal(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
