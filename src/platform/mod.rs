// CauseConv - platform/mod.rs
//
// Platform abstraction layer: config directory resolution and config.toml.
// Dependencies: standard library, directories crate, core output types.
// Must NOT depend on: app.

pub mod config;
