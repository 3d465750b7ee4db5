//! Unit tests for Tileboard.

mod context_menu_tests;
mod perf_tests;
mod settings_tests;
mod shortcut_tests;
