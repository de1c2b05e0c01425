use super::validation::ProductPayload;
use super::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// A product that has not been stored yet and therefore has no id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl From<ProductPayload> for NewProduct {
    fn from(payload: ProductPayload) -> Self {
        let (name, description, price) = payload.into_parts();
        Self {
            name,
            description,
            price,
        }
    }
}

impl NewProduct {
    /// Attaches the id handed out by the store.
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: ProductId, name: String, description: String, price: f64) -> Self {
        Self {
            id,
            name,
            description,
            price,
        }
    }

    /// Overwrites the editable fields in place; the id never changes.
    pub fn apply(&mut self, payload: ProductPayload) {
        let (name, description, price) = payload.into_parts();
        self.name = name;
        self.description = description;
        self.price = price;
    }
}
