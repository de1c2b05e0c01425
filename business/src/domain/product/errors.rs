use super::value_objects::ProductId;
use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Product with id {0} not found")]
    NotFound(ProductId),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl ProductError {
    /// Maps a repository lookup failure for `id`, turning the store's
    /// not-found into the domain one so the message can name the product.
    pub fn from_lookup(id: ProductId, err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ProductError::NotFound(id),
            other => ProductError::Repository(other),
        }
    }
}
