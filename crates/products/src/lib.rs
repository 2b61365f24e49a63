//! Products domain module.
//!
//! This crate contains the product record and the ordered catalog built from
//! it, implemented purely as deterministic domain logic (no IO, no CLI, no
//! storage).

pub mod catalog;
pub mod product;
pub mod table;

pub use catalog::Catalog;
pub use product::{Product, ProductCreate};
pub use table::EMPTY_CATALOG_MESSAGE;
