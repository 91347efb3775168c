//! Application layer use cases for the wardrobe studio.
//!
//! Use cases in this layer orchestrate `wardrobe_core` domain objects to
//! fulfil a user goal, depend on traits rather than concrete adapters, and
//! perform no file system or network access themselves.
//!
//! # Sub-modules
//!
//! - **`compose_outfit`** – The outfit-editing session: loads the catalog
//!   from a [`CatalogSource`](compose_outfit::CatalogSource), applies cycle /
//!   randomize / clear commands, and turns connectivity checks into
//!   liveliness indicator updates.

pub mod compose_outfit;
