use std::fmt;
use std::str::FromStr;

use crate::error::LogError;

/// Process-wide deployment mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeploymentMode {
    /// Verbose diagnostics, debug output enabled.
    #[default]
    Developer,
    /// Production with the full deployment pipeline.
    ProductionFull,
    /// Production switched on without the compilation step.
    ProductionMinimal,
}

impl DeploymentMode {
    pub const ALL: [DeploymentMode; 3] = [
        DeploymentMode::Developer,
        DeploymentMode::ProductionFull,
        DeploymentMode::ProductionMinimal,
    ];

    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::ProductionFull | Self::ProductionMinimal)
    }

    /// Value stored under `[deploy] mode`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Developer => "developer",
            Self::ProductionFull => "production",
            Self::ProductionMinimal => "production-minimal",
        }
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeploymentMode {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "developer" | "dev" => Ok(Self::Developer),
            "production" | "production-full" | "prod" => Ok(Self::ProductionFull),
            "production-minimal" | "production_minimal" => Ok(Self::ProductionMinimal),
            _ => Err(LogError::UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn only_production_variants_are_production() {
        assert!(!DeploymentMode::Developer.is_production());
        assert!(DeploymentMode::ProductionFull.is_production());
        assert!(DeploymentMode::ProductionMinimal.is_production());
    }

    #[test]
    fn as_str_parses_back() {
        for mode in DeploymentMode::ALL {
            assert_eq!(mode.as_str().parse::<DeploymentMode>().unwrap(), mode);
        }
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = "staging".parse::<DeploymentMode>().unwrap_err();
        assert!(matches!(err, LogError::UnknownMode(m) if m == "staging"));
    }
}
