//! Logging facilities for Horizon Grid.
//!
//! Horizon Grid uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_grid=debug")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! The [`targets`] constants name the subsystems so directives can filter
//! them individually, e.g. `horizon_grid::model=trace,horizon_grid_core::signal=off`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "horizon_grid_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_grid_core::signal";
    /// Table data model target.
    pub const MODEL: &str = "horizon_grid::model";
    /// Selection-driven editing target.
    pub const CONTROLLER: &str = "horizon_grid::controller";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_grid::config";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::trace_span!(target: "horizon_grid::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// These are thin wrappers around the `tracing` macros with consistent
/// target naming.
#[macro_export]
macro_rules! grid_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "horizon_grid_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! grid_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "horizon_grid_core", $($arg)*)
    };
}
