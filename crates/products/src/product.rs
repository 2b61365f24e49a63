//! Product record and its creation payload.

use serde::{Deserialize, Serialize};

use pricelist_core::{DomainError, DomainResult, ValueObject};

/// A single price-list entry.
///
/// Records carry no identifier; they are addressed by their position in a
/// [`Catalog`](crate::Catalog). The persisted key for the shop is `"shope"`,
/// which existing data files depend on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub name: String,
    /// Absent is a real value, distinct from zero. Written as `null`.
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(rename = "shope", default)]
    pub shop: String,
}

impl ValueObject for Product {}

impl Product {
    pub fn new(name: impl Into<String>, price: Option<f64>, shop: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            shop: shop.into(),
        }
    }

    /// Build a record from a creation payload.
    ///
    /// Only emptiness of `name` and `shop` is checked; duplicate names and
    /// odd prices are accepted as given.
    pub fn try_from_create(params: ProductCreate) -> DomainResult<Self> {
        if params.name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if params.shop.is_empty() {
            return Err(DomainError::validation("shop cannot be empty"));
        }

        Ok(Self::new(params.name, params.price, params.shop))
    }
}

/// Payload for appending a new product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCreate {
    pub name: String,
    pub price: Option<f64>,
    pub shop: String,
}

impl ProductCreate {
    pub fn new(name: impl Into<String>, price: Option<f64>, shop: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            shop: shop.into(),
        }
    }
}
