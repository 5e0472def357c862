//! Mode-gated logging.
//!
//! Debug output goes to a dedicated `debug.log` while the application runs in
//! developer mode and is suppressed in production unless "log to file" is
//! switched on. The crate is split into:
//!
//! - [`log`]: records, sinks and the [`Logger`](log::Logger) facade.
//! - [`deploy`]: deployment mode, settings snapshots and the mode switcher.
//! - [`config`]: the key-value environment file the switcher persists to.
//! - [`filesystem`]: directory-scoped and atomic file helpers.

/// Handles configuration loading and management.
pub mod config;
/// Deployment mode, settings snapshots and mode switching.
pub mod deploy;
/// Tracing subscriber setup for binaries.
pub mod diagnostics;
/// Error type shared by every module.
pub mod error;
/// Directory-scoped and atomic file operations.
pub mod filesystem;
/// Logging utilities: records, sinks and the logger facade.
pub mod log;
