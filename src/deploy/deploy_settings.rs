use crate::{
    config::Config,
    deploy::deployment_mode::DeploymentMode,
    error::LogResult,
};

pub const DEPLOY_SECTION: &str = "deploy";
pub const MODE_KEY: &str = "mode";
pub const DEBUG_SECTION: &str = "dev/debug";
pub const LOG_TO_FILE_KEY: &str = "debug_logging";

/// Immutable snapshot of the settings the debug sink depends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeploySettings {
    pub mode: DeploymentMode,
    /// The "log to file" flag. Production modes only write debug records when
    /// this is set.
    pub log_to_file: bool,
}

impl Default for DeploySettings {
    fn default() -> Self {
        Self {
            mode: DeploymentMode::Developer,
            log_to_file: true,
        }
    }
}

impl DeploySettings {
    #[must_use]
    pub const fn new(mode: DeploymentMode, log_to_file: bool) -> Self {
        Self { mode, log_to_file }
    }

    /// Enters `mode`, resetting the "log to file" flag to the mode's default:
    /// on for developer, off for both production variants.
    #[must_use]
    pub const fn switch_mode(self, mode: DeploymentMode) -> Self {
        Self {
            mode,
            log_to_file: !mode.is_production(),
        }
    }

    #[must_use]
    pub const fn with_log_to_file(self, log_to_file: bool) -> Self {
        Self {
            mode: self.mode,
            log_to_file,
        }
    }

    /// Whether a debug-level record may be written under these settings.
    #[must_use]
    pub const fn debug_logging_enabled(self) -> bool {
        !self.mode.is_production() || self.log_to_file
    }

    /// Reads the snapshot from an environment file. Missing keys fall back to
    /// [`Default`]; a missing flag falls back to the mode's default.
    pub fn from_config(cfg: &Config) -> LogResult<Self> {
        let mode = match cfg.get_non_empty(DEPLOY_SECTION, MODE_KEY) {
            Some(raw) => raw.parse()?,
            None => Self::default().mode,
        };
        let log_to_file = cfg
            .get_bool(DEBUG_SECTION, LOG_TO_FILE_KEY)?
            .unwrap_or(!mode.is_production());
        Ok(Self { mode, log_to_file })
    }

    pub fn write_into(self, cfg: &mut Config) -> LogResult<()> {
        cfg.set(DEPLOY_SECTION, MODE_KEY, self.mode.as_str())?;
        cfg.set(
            DEBUG_SECTION,
            LOG_TO_FILE_KEY,
            if self.log_to_file { "1" } else { "0" },
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::error::LogError;

    #[test]
    fn switching_resets_flag_to_mode_default() {
        let dev = DeploySettings::default();
        let prod = dev.switch_mode(DeploymentMode::ProductionMinimal);
        assert_eq!(prod.mode, DeploymentMode::ProductionMinimal);
        assert!(!prod.log_to_file);

        let back = prod.switch_mode(DeploymentMode::Developer);
        assert!(back.log_to_file);
        // The original snapshot is untouched.
        assert_eq!(dev, DeploySettings::default());
    }

    #[test]
    fn debug_logging_gate() {
        use DeploymentMode::*;
        assert!(DeploySettings::new(Developer, true).debug_logging_enabled());
        assert!(DeploySettings::new(Developer, false).debug_logging_enabled());
        assert!(!DeploySettings::new(ProductionFull, false).debug_logging_enabled());
        assert!(!DeploySettings::new(ProductionMinimal, false).debug_logging_enabled());
        assert!(DeploySettings::new(ProductionFull, true).debug_logging_enabled());
        assert!(DeploySettings::new(ProductionMinimal, true).debug_logging_enabled());
    }

    #[test]
    fn config_round_trip() {
        let mut cfg = Config::empty();
        let s = DeploySettings::new(DeploymentMode::ProductionFull, true);
        s.write_into(&mut cfg).unwrap();
        assert_eq!(cfg.get("dev/debug", "debug_logging"), Some("1"));
        assert_eq!(DeploySettings::from_config(&cfg).unwrap(), s);
    }

    #[test]
    fn missing_flag_follows_mode() {
        let cfg = Config::parse("[deploy]\nmode = production-minimal\n").unwrap();
        let s = DeploySettings::from_config(&cfg).unwrap();
        assert_eq!(s.mode, DeploymentMode::ProductionMinimal);
        assert!(!s.log_to_file);

        assert_eq!(
            DeploySettings::from_config(&Config::empty()).unwrap(),
            DeploySettings::default()
        );
    }

    #[test]
    fn bad_mode_surfaces() {
        let cfg = Config::parse("[deploy]\nmode = turbo\n").unwrap();
        assert!(matches!(
            DeploySettings::from_config(&cfg),
            Err(LogError::UnknownMode(_))
        ));
    }
}
