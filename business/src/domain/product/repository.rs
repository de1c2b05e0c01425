use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::filter::ProductFilter;
use super::model::{NewProduct, Product};
use super::value_objects::ProductId;

/// Storage port for products.
///
/// `get_by_id`, `save` and `delete` report [`RepositoryError::NotFound`] when
/// no row exists for the id.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persists a new product and returns it with the id the store assigned.
    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    /// All products, in the store's native order.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_filtered(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError>;
    /// Overwrites an existing product.
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
}
