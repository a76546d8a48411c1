// CauseConv - core/mod.rs
//
// Core business logic layer: input gate, classifier, era bands, rendering.
// Must NOT depend on: platform, app, or the filesystem.

pub mod century;
pub mod classifier;
pub mod colour;
pub mod era;
pub mod gate;
pub mod model;
pub mod render;
