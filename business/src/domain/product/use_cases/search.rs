use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

/// Search criteria; every field is optional.
#[derive(Debug, Default)]
pub struct SearchProductsParams {
    pub query: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

#[async_trait]
pub trait SearchProductsUseCase: Send + Sync {
    async fn execute(&self, params: SearchProductsParams) -> Result<Vec<Product>, ProductError>;
}
