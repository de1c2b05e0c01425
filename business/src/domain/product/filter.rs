use super::model::Product;

/// Optional search criteria, combined with AND.
///
/// Each clause that is `None` imposes no constraint, so the default filter
/// matches every product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    query: Option<String>,
    min_price: Option<f64>,
    max_price: Option<f64>,
}

impl ProductFilter {
    /// An empty query string is treated the same as no query.
    pub fn new(query: Option<String>, min_price: Option<f64>, max_price: Option<f64>) -> Self {
        Self {
            query: query.filter(|q| !q.is_empty()),
            min_price,
            max_price,
        }
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn min_price(&self) -> Option<f64> {
        self.min_price
    }

    pub fn max_price(&self) -> Option<f64> {
        self.max_price
    }

    pub fn is_unbounded(&self) -> bool {
        self.query.is_none() && self.min_price.is_none() && self.max_price.is_none()
    }

    /// Name or description contains the query, ignoring case.
    pub fn matches_query(&self, product: &Product) -> bool {
        match &self.query {
            None => true,
            Some(query) => {
                let needle = query.to_lowercase();
                product.name.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle)
            }
        }
    }

    pub fn matches_min_price(&self, product: &Product) -> bool {
        self.min_price.is_none_or(|min| product.price >= min)
    }

    pub fn matches_max_price(&self, product: &Product) -> bool {
        self.max_price.is_none_or(|max| product.price <= max)
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.matches_query(product)
            && self.matches_min_price(product)
            && self.matches_max_price(product)
    }
}

impl std::fmt::Display for ProductFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "q={:?} min_price={:?} max_price={:?}",
            self.query, self.min_price, self.max_price
        )
    }
}
