/// The single normalized error for malformed transport data or an invalid
/// update state (e.g. updating a product that was never persisted).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("product.invalid_data: {message}")]
pub struct DataValidationError {
    pub message: String,
}

impl DataValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.not_found")]
    NotFound,
    #[error(transparent)]
    InvalidData(#[from] DataValidationError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
