//! Infrastructure layer for the wardrobe studio.
//!
//! Contains the adapters around the application layer: the JSON catalog
//! feed, the debounced connectivity monitor, and TOML configuration storage.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `wardrobe_core`, but MUST NOT be imported by the `application` or domain
//! layers.

pub mod catalog;
pub mod monitor;
pub mod storage;
