//! The fixed, read-only product catalog.

use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::product::{Price, Product, ProductId};

/// Immutable, ordered product list shared by every request.
///
/// Cloning is cheap: clones share the same backing slice. There is no
/// mutation API, so no synchronization is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    /// Creates a catalog from the given products, keeping their order.
    pub fn new(products: impl Into<Vec<Product>>) -> Self {
        let products: Vec<Product> = products.into();
        Self {
            products: products.into(),
        }
    }

    /// Creates the catalog served in production.
    pub fn seeded() -> Self {
        Self::new(vec![
            Product::new(ProductId::new(1), "Dog Food", Price::from_cents(1999)),
            Product::new(ProductId::new(2), "Cat Food", Price::from_cents(3499)),
            Product::new(ProductId::new(3), "Bird Seeds", Price::from_cents(1099)),
        ])
    }

    /// Returns all products in insertion order.
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

    /// Looks up a product by ID.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.products.iter())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
