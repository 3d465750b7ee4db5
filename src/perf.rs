//! Dispatch timing instrumentation.
//!
//! Every input event is handled synchronously, so a slow mode handler stalls
//! the whole editor. `ScopedTimer` measures a scope and reports it through
//! `tracing` when it exceeds its budget.
//!
//! ## Usage
//!
//! Enable fine-grained profiling with the `profiling` feature flag:
//! ```toml
//! [dependencies]
//! tileboard = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! use tileboard::profile_scope;
//!
//! fn item_at_tile() {
//!     profile_scope!("item_at_tile");  // Times just this block
//!     // ... work ...
//! }
//! ```

use crate::constants::SLOW_DISPATCH_MS;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
#[cfg(feature = "profiling")]
use tracing::trace;
#[cfg(not(feature = "profiling"))]
use tracing::warn;

/// Global flag to enable/disable profiling at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

// ============================================================================
// Profiling Macros (zero-cost when disabled)
// ============================================================================

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
}

// ============================================================================
// Runtime Profiling Control
// ============================================================================

/// Enable or disable profiling at runtime.
/// Only affects code compiled with the `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// RAII timer that reports on drop when its scope ran over budget.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
    #[cfg(feature = "profiling")]
    depth: usize,
}

#[cfg(feature = "profiling")]
thread_local! {
    static CURRENT_DEPTH: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

impl ScopedTimer {
    /// Create a new scoped timer with a warning threshold.
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        #[cfg(feature = "profiling")]
        let depth = CURRENT_DEPTH.with(|d| {
            let current = d.get();
            d.set(current + 1);
            current
        });

        Self {
            name,
            start: Instant::now(),
            threshold_ms,
            #[cfg(feature = "profiling")]
            depth,
        }
    }

    /// Timer with the one-frame dispatch budget.
    pub fn with_default_threshold(name: &'static str) -> Self {
        Self::new(name, SLOW_DISPATCH_MS)
    }

    /// Timer for profiling builds (1ms threshold).
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();

        #[cfg(feature = "profiling")]
        {
            CURRENT_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));

            if is_profiling_enabled() && elapsed_ms > self.threshold_ms {
                let indent = "  ".repeat(self.depth);
                trace!("{}[PERF] {}: {:.2}ms", indent, self.name, elapsed_ms);
            }
        }

        #[cfg(not(feature = "profiling"))]
        {
            if elapsed_ms > self.threshold_ms {
                warn!(
                    operation = self.name,
                    elapsed_ms = format!("{:.2}", elapsed_ms),
                    threshold_ms = format!("{:.2}", self.threshold_ms),
                    "Slow operation"
                );
            }
        }
    }
}
