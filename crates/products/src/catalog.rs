//! Ordered product collection backing one data file.

use serde::{Deserialize, Serialize};

use pricelist_core::DomainResult;

use crate::product::{Product, ProductCreate};

/// Ordered list of products.
///
/// Insertion order is meaningful: it defines display order and the 1-based
/// index shown next to each row. Persisted as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Return this catalog with one new record appended at the end.
    pub fn append(mut self, params: ProductCreate) -> DomainResult<Self> {
        let product = Product::try_from_create(params)?;
        self.products.push(product);
        Ok(self)
    }

    /// Records whose name equals `query` exactly (case-sensitive, full match).
    ///
    /// An empty result means "no match", not an error.
    pub fn filter_by_name(&self, query: &str) -> Self {
        self.products
            .iter()
            .filter(|p| p.name == query)
            .cloned()
            .collect()
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Catalog {
    type Item = Product;
    type IntoIter = std::vec::IntoIter<Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.into_iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
