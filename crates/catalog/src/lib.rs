//! Product catalog: the product value type, the remote catalog client, and
//! locally created products.
//!
//! This crate does not know about carts. It only guarantees that products are
//! plain values that can be used as map keys.

pub mod api;
pub mod draft;
pub mod http;
pub mod product;
pub mod repository;

pub use api::{CatalogError, ProductApi};
pub use draft::{LocalCatalog, ProductDraft};
pub use http::HttpProductApi;
pub use product::{Product, format_amount};
pub use repository::ProductRepository;
