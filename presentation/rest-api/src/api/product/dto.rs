use poem_openapi::Object;

use business::domain::product::model::Product;
use business::domain::product::validation::ProductInput;

/// Body for creating or replacing a product.
///
/// Fields are optional on the wire so missing ones are reported as field
/// violations (422) rather than as an undecodable body.
#[derive(Debug, Clone, Object)]
pub struct ProductRequest {
    /// Product name (cannot be blank)
    pub name: Option<String>,
    /// Product description (cannot be blank)
    pub description: Option<String>,
    /// Unit price (must be greater than zero)
    pub price: Option<f64>,
}

impl From<ProductRequest> for ProductInput {
    fn from(request: ProductRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            price: request.price,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: i64,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name,
            description: product.description,
            price: product.price,
        }
    }
}
