//! Mocks and fixtures shared by the use case tests.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::filter::ProductFilter;
use crate::domain::product::model::{NewProduct, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::validation::{ProductInput, ProductPayload};
use crate::domain::product::value_objects::ProductId;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
        async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
        async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn find_filtered(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError>;
        async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
        async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn payload(name: &str, description: &str, price: f64) -> ProductPayload {
    ProductInput {
        name: Some(name.to_string()),
        description: Some(description.to_string()),
        price: Some(price),
    }
    .validate()
    .expect("fixture payload must be valid")
}

pub fn product(id: i64, name: &str, description: &str, price: f64) -> Product {
    Product::from_repository(
        ProductId::new(id),
        name.to_string(),
        description.to_string(),
        price,
    )
}

pub fn monitor(id: i64) -> Product {
    product(id, "Monitor", "Monitor IPS de 27 Polegadas", 960.0)
}

pub fn motherboard(id: i64) -> Product {
    product(id, "Placa mãe B650M", "Plataforma AM5", 750.0)
}
