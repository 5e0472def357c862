use std::sync::{Arc, PoisonError, RwLock};

use crate::{deploy::deploy_settings::DeploySettings, error::LogResult};

/// Supplies the settings in force at the moment of a log call.
///
/// Sinks call [`current`](Self::current) on every record, so a mode switch
/// made between two calls is always observed.
pub trait SettingsSource: Send + Sync {
    fn current(&self) -> LogResult<DeploySettings>;
}

/// A fixed snapshot is its own source.
impl SettingsSource for DeploySettings {
    #[inline]
    fn current(&self) -> LogResult<DeploySettings> {
        Ok(*self)
    }
}

/// Shared slot holding the latest snapshot, for callers that switch modes in
/// memory instead of through an environment file.
///
/// Clones share the slot.
#[derive(Clone, Debug, Default)]
pub struct SettingsCell {
    inner: Arc<RwLock<DeploySettings>>,
}

impl SettingsCell {
    pub fn new(initial: DeploySettings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> DeploySettings {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies a transition to the current snapshot and installs the result.
    pub fn update(&self, f: impl FnOnce(DeploySettings) -> DeploySettings) -> DeploySettings {
        let mut slot = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *slot = f(*slot);
        *slot
    }
}

impl SettingsSource for SettingsCell {
    fn current(&self) -> LogResult<DeploySettings> {
        Ok(self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::deploy::DeploymentMode;

    #[test]
    fn snapshot_is_its_own_source() {
        let s = DeploySettings::new(DeploymentMode::ProductionFull, true);
        assert_eq!(s.current().unwrap(), s);
    }

    #[test]
    fn clones_share_updates() {
        let cell = SettingsCell::new(DeploySettings::default());
        let observer = cell.clone();

        let next = cell.update(|s| s.switch_mode(DeploymentMode::ProductionMinimal));
        assert_eq!(observer.current().unwrap(), next);

        cell.update(|s| s.with_log_to_file(true));
        assert_eq!(
            observer.snapshot(),
            DeploySettings::new(DeploymentMode::ProductionMinimal, true)
        );
    }
}
