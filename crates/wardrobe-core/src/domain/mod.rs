//! Domain entities for outfit composition.
//!
//! This module contains pure business logic with no infrastructure dependencies.
//!
//! # What lives here
//!
//! - **`catalog`** – Clothing categories and items as handed over by the
//!   backend catalog feed.
//! - **`layers`** – The five outfit layers and their cursors: cycling,
//!   randomizing, clearing, and position labels.
//! - **`random`** – The injectable random source used for outfit generation.
//! - **`geometry`** – Bounding boxes of rendered items.
//! - **`connectivity`** – Whether the rendered items form one cluster.
//! - **`outfit`** – Snapshot of the selected items.
//! - **`liveliness`** – The cosmetic alive/dead indicator driven by
//!   connectivity.
//!
//! Nothing in this module performs I/O, spawns tasks, or reads the clock, so
//! every operation can be tested synchronously.

pub mod catalog;
pub mod connectivity;
pub mod geometry;
pub mod layers;
pub mod liveliness;
pub mod outfit;
pub mod random;
