//! Products domain module.
//!
//! This crate contains business rules for products and purchases, implemented
//! purely as deterministic domain logic (no IO, no storage). Stores plug in
//! through [`ProductRepository`].

pub mod product;
pub mod repository;
pub mod service;

pub use catalog_core::ProductId;
pub use product::{Product, ProductStatus};
pub use repository::ProductRepository;
pub use service::ProductService;
