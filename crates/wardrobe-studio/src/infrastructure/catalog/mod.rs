//! Catalog feed adapters.
//!
//! Implementations of [`CatalogSource`](crate::application::compose_outfit::CatalogSource)
//! that supply the user's clothing items to an outfit session.

pub mod json_file;

pub use json_file::{parse_catalog, JsonFileCatalog};
