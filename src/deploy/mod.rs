//! Deployment mode and the "log to file" setting.
//!
//! Settings are immutable [`DeploySettings`] snapshots. Transitions are pure
//! functions on the snapshot; [`ModeSwitcher`] persists the result to the
//! environment file, and sinks re-read a [`SettingsSource`] on every call.

pub mod deploy_settings;
pub mod deployment_mode;
pub mod mode_switcher;
pub mod settings_source;

pub use deploy_settings::DeploySettings;
pub use deployment_mode::DeploymentMode;
pub use mode_switcher::ModeSwitcher;
pub use settings_source::{SettingsCell, SettingsSource};
