// CauseConv - app/mod.rs
//
// Application layer: the caller-owned result list and the interactive
// session that drives gate, classifier, and renderer.
// Dependencies: core layer.
// Must NOT depend on: platform specifics.

pub mod results;
pub mod session;
