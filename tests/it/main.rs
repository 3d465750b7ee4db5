//! Single test binary entry point.
//!
//! One binary instead of one per file keeps link times down.
//!
//! Structure:
//! - helpers: Mock window/surface, scene builder, dispatch harness
//! - integration: Multi-event workflows through `InteractionManager`
//! - unit: Single-component tests against the public API

mod helpers;
mod integration;
mod unit;
