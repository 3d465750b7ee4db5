//! Unit tests for perf module.

use tileboard::perf::{ScopedTimer, is_profiling_enabled, set_profiling_enabled};

#[test]
fn test_scoped_timer_creation() {
    // High threshold: dropping must not warn or panic
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert_eq!(timer.name(), "test_op");
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_default_threshold_timer() {
    let timer = ScopedTimer::with_default_threshold("dispatch");
    assert_eq!(timer.name(), "dispatch");
}

#[test]
fn test_profiling_toggle() {
    set_profiling_enabled(true);
    assert!(is_profiling_enabled());
    set_profiling_enabled(false);
    assert!(!is_profiling_enabled());
}
