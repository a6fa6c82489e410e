//! Product catalog for the product service.
//!
//! Holds the `Product` entity and the immutable `Catalog` that is seeded
//! once at process start and shared read-only by every request.

pub mod catalog;
pub mod product;

pub use catalog::Catalog;
pub use product::{Price, Product, ProductId};
