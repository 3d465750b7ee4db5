//! Integration tests for Tileboard.
//!
//! These tests drive `InteractionManager` with sequences of raw events and
//! check the resulting scene and UI state end-to-end.

mod listener_tests;
