use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found with filter: {0}")]
    NotFound(Uuid),

    #[error("Database error: {0}")]
    Database(String),
}

impl ProductError {
    /// True when a lookup by identifier matched nothing
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProductError::NotFound(_))
    }
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Database(err.to_string())
    }
}
