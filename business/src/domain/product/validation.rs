use std::collections::BTreeMap;

pub const NAME_FIELD: &str = "name";
pub const DESCRIPTION_FIELD: &str = "description";
pub const PRICE_FIELD: &str = "price";

pub const NAME_REQUIRED: &str = "The 'name' field is required";
pub const DESCRIPTION_REQUIRED: &str = "The 'description' field is required";
pub const PRICE_REQUIRED: &str = "The 'price' field is required";
pub const PRICE_NOT_POSITIVE: &str = "The price must be greater than zero";

/// Raw create/update input as decoded from a request, before any checks.
///
/// Every field is optional so that a missing field surfaces as a field
/// violation instead of a decoding failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

/// A create/update payload that passed [`ProductInput::validate`].
///
/// The fields are private: the only way to build one is through validation,
/// so anything holding a `ProductPayload` is known to be storable.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPayload {
    name: String,
    description: String,
    price: f64,
}

impl ProductPayload {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn into_parts(self) -> (String, String, f64) {
        (self.name, self.description, self.price)
    }
}

/// Field violations collected while validating a [`ProductInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("Invalid field(s)")]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &str, message: &str) {
        self.fields
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn into_fields(self) -> BTreeMap<String, String> {
        self.fields
    }
}

fn required_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ProductInput {
    /// Checks every constraint and reports all violations at once.
    pub fn validate(self) -> Result<ProductPayload, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = required_text(self.name);
        if name.is_none() {
            errors.add(NAME_FIELD, NAME_REQUIRED);
        }

        let description = required_text(self.description);
        if description.is_none() {
            errors.add(DESCRIPTION_FIELD, DESCRIPTION_REQUIRED);
        }

        match self.price {
            None => errors.add(PRICE_FIELD, PRICE_REQUIRED),
            Some(price) if price.is_nan() || price <= 0.0 => {
                errors.add(PRICE_FIELD, PRICE_NOT_POSITIVE)
            }
            Some(_) => {}
        }

        match (name, description, self.price) {
            (Some(name), Some(description), Some(price)) if errors.is_empty() => {
                Ok(ProductPayload {
                    name,
                    description,
                    price,
                })
            }
            _ => Err(errors),
        }
    }
}
