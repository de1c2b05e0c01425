use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let mut product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| ProductError::from_lookup(params.id, e))
            .inspect_err(|e| self.logger.warn(&e.to_string()))?;

        product.apply(params.payload);

        // The row may be gone by now if a delete raced this update
        self.repository
            .save(&product)
            .await
            .map_err(|e| ProductError::from_lookup(params.id, e))?;

        self.logger
            .info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}
