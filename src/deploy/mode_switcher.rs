use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    config::Config,
    deploy::{
        deploy_settings::DeploySettings, deployment_mode::DeploymentMode,
        settings_source::SettingsSource,
    },
    error::{LogError, LogResult},
    filesystem::ScopedDir,
};

const DEFAULT_ENV_FILE: &str = "env.conf";

/// Switches the deployment mode by rewriting the environment file.
///
/// Every switch loads the file, applies a [`DeploySettings`] transition,
/// writes the result back atomically and returns the new snapshot. Keys the
/// switcher does not own are preserved. A missing file reads as
/// [`DeploySettings::default`].
///
/// The switcher is also a [`SettingsSource`]: handing it to a sink makes the
/// sink follow the file on every call.
#[derive(Debug, Clone)]
pub struct ModeSwitcher {
    dir: ScopedDir,
    file_name: PathBuf,
}

impl ModeSwitcher {
    pub fn new(env_path: impl AsRef<Path>) -> Self {
        let env_path = env_path.as_ref();
        let dir = match env_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name = env_path
            .file_name()
            .map_or_else(|| PathBuf::from(DEFAULT_ENV_FILE), PathBuf::from);
        Self {
            dir: ScopedDir::new(dir),
            file_name,
        }
    }

    #[must_use]
    pub fn env_path(&self) -> PathBuf {
        self.dir.root().join(&self.file_name)
    }

    fn backup_name(&self) -> PathBuf {
        let mut name = OsString::from(self.file_name.as_os_str());
        name.push(".base");
        PathBuf::from(name)
    }

    fn load_config(&self) -> LogResult<Config> {
        let path = self.env_path();
        if !path.exists() {
            return Ok(Config::empty());
        }
        Config::load(&path)
    }

    /// Reads the settings currently persisted.
    pub fn settings(&self) -> LogResult<DeploySettings> {
        DeploySettings::from_config(&self.load_config()?)
    }

    pub fn current_mode(&self) -> LogResult<DeploymentMode> {
        Ok(self.settings()?.mode)
    }

    pub fn enable_developer_mode(&self) -> LogResult<DeploySettings> {
        self.set_mode(DeploymentMode::Developer)
    }

    pub fn enable_production_mode(&self) -> LogResult<DeploySettings> {
        self.set_mode(DeploymentMode::ProductionFull)
    }

    /// Production without the compilation step.
    pub fn enable_production_mode_minimal(&self) -> LogResult<DeploySettings> {
        self.set_mode(DeploymentMode::ProductionMinimal)
    }

    pub fn set_mode(&self, mode: DeploymentMode) -> LogResult<DeploySettings> {
        self.apply(|s| s.switch_mode(mode))
    }

    /// Toggles "log to file" without leaving the current mode.
    pub fn set_log_to_file(&self, enabled: bool) -> LogResult<DeploySettings> {
        self.apply(|s| s.with_log_to_file(enabled))
    }

    fn apply(&self, f: impl FnOnce(DeploySettings) -> DeploySettings) -> LogResult<DeploySettings> {
        let mut cfg = self.load_config()?;
        let prev = DeploySettings::from_config(&cfg)?;
        let next = f(prev);
        next.write_into(&mut cfg)?;
        self.dir.write_atomic(&self.file_name, cfg.render())?;
        info!(
            from = %prev.mode,
            to = %next.mode,
            log_to_file = next.log_to_file,
            "deployment settings updated"
        );
        Ok(next)
    }

    /// Copies the environment file aside so [`restore`](Self::restore) can
    /// put it back.
    pub fn backup(&self) -> LogResult<()> {
        self.dir.copy_file(&self.file_name, self.backup_name())
    }

    /// Replaces the environment file with the copy made by
    /// [`backup`](Self::backup). The live file is left untouched when there
    /// is no backup.
    ///
    /// # Errors
    ///
    /// [`LogError::MissingBackup`] if [`backup`](Self::backup) was never run,
    /// [`LogError::Io`] if the rename fails.
    pub fn restore(&self) -> LogResult<()> {
        let backup = self.backup_name();
        if !self.dir.exists(&backup)? {
            return Err(LogError::MissingBackup(self.dir.root().join(backup)));
        }
        self.dir.rename_file(backup, &self.file_name)
    }
}

impl SettingsSource for ModeSwitcher {
    fn current(&self) -> LogResult<DeploySettings> {
        self.settings()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use std::fs;

    #[test]
    fn missing_file_reads_as_default() {
        let dir = tempfile::tempdir().unwrap();
        let switcher = ModeSwitcher::new(dir.path().join("env.conf"));
        assert_eq!(switcher.settings().unwrap(), DeploySettings::default());
    }

    #[test]
    fn switch_persists_mode_and_flag() {
        let dir = tempfile::tempdir().unwrap();
        let switcher = ModeSwitcher::new(dir.path().join("env.conf"));

        let s = switcher.enable_production_mode_minimal().unwrap();
        assert_eq!(s.mode, DeploymentMode::ProductionMinimal);
        assert!(!s.log_to_file);

        let content = fs::read_to_string(switcher.env_path()).unwrap();
        assert!(content.contains("mode = production-minimal"));
        assert!(content.contains("debug_logging = 0"));
        assert_eq!(switcher.current().unwrap(), s);
    }

    #[test]
    fn unrelated_keys_survive_a_switch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("env.conf");
        fs::write(&path, "[db]\nhost = localhost\n[deploy]\nmode = developer\n").unwrap();

        let switcher = ModeSwitcher::new(&path);
        switcher.enable_production_mode().unwrap();

        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.get("db", "host"), Some("localhost"));
        assert_eq!(cfg.get("deploy", "mode"), Some("production"));
    }

    #[test]
    fn backup_and_restore() {
        let dir = tempfile::tempdir().unwrap();
        let switcher = ModeSwitcher::new(dir.path().join("env.conf"));
        switcher.enable_developer_mode().unwrap();
        switcher.backup().unwrap();

        switcher.enable_production_mode().unwrap();
        assert_eq!(
            switcher.current_mode().unwrap(),
            DeploymentMode::ProductionFull
        );

        switcher.restore().unwrap();
        assert_eq!(switcher.current_mode().unwrap(), DeploymentMode::Developer);
        assert!(!dir.path().join("env.conf.base").exists());
    }

    #[test]
    fn restore_without_backup_keeps_live_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("env.conf");
        fs::write(&path, "[deploy]\nmode = production\n").unwrap();

        let switcher = ModeSwitcher::new(&path);
        let err = switcher.restore().unwrap_err();
        assert!(matches!(err, LogError::MissingBackup(_)));

        assert!(path.exists());
        assert_eq!(
            switcher.current_mode().unwrap(),
            DeploymentMode::ProductionFull
        );
    }

    #[test]
    fn restore_twice_fails_second_time() {
        let dir = tempfile::tempdir().unwrap();
        let switcher = ModeSwitcher::new(dir.path().join("env.conf"));
        switcher.enable_developer_mode().unwrap();
        switcher.backup().unwrap();
        switcher.enable_production_mode_minimal().unwrap();

        switcher.restore().unwrap();
        assert!(switcher.restore().is_err());
        assert_eq!(switcher.current_mode().unwrap(), DeploymentMode::Developer);
    }
}
