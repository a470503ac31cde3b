use thiserror::Error;

/// Failures surfaced by the storage layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested record does not exist (or is scoped to another user).
    #[error("record not found")]
    NotFound,
    /// The in-transaction availability re-check found too little stock.
    /// Raised only when a competing reservation landed between the service's
    /// fail-fast check and the write transaction.
    #[error("insufficient stock for product {product_id}")]
    StockConflict { product_id: i32 },
    /// The connection pool could not hand out a connection.
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// Any other database failure.
    #[error("database error: {0}")]
    Database(diesel::result::Error),
}

impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound,
            other => Self::Database(other),
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
