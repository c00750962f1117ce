use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Tunable constants for geometry derivation and item manipulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Nominal wall thickness in inches.
    pub wall_thickness: f64,
    /// Clearance kept in front of openings, beyond the wall thickness.
    pub clearance_margin: f64,
    /// Degrees applied by a single rotate step.
    pub rotation_step: f64,
    /// Inches applied by a single nudge step.
    pub nudge_step: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            wall_thickness: 6.0,
            clearance_margin: 24.0,
            rotation_step: 15.0,
            nudge_step: 1.0,
        }
    }
}

impl LayoutConfig {
    /// Full depth of an opening clearance zone.
    #[must_use]
    pub fn zone_depth(&self) -> f64 {
        self.wall_thickness + self.clearance_margin
    }

    /// Parses a config from TOML. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` on malformed TOML and
    /// `ConfigError::Invalid` for negative or non-finite values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config file from disk.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise the
    /// same errors as [`LayoutConfig::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::from)?;
        tracing::debug!(path = %path.display(), "loading layout config");
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        let fields = [
            ("wall_thickness", self.wall_thickness),
            ("clearance_margin", self.clearance_margin),
            ("rotation_step", self.rotation_step),
            ("nudge_step", self.nudge_step),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::RoomplanError;

    #[test]
    fn defaults() {
        let config = LayoutConfig::default();
        assert!((config.zone_depth() - 30.0).abs() < 1e-12);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = LayoutConfig::from_toml_str("clearance_margin = 36.0").unwrap();
        assert!((config.clearance_margin - 36.0).abs() < 1e-12);
        assert!((config.wall_thickness - 6.0).abs() < 1e-12);
        assert!((config.rotation_step - 15.0).abs() < 1e-12);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(LayoutConfig::from_toml_str("").unwrap(), LayoutConfig::default());
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = LayoutConfig::from_toml_str("wall_thickness = [").unwrap_err();
        assert!(matches!(err, RoomplanError::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn negative_value_is_rejected() {
        let err = LayoutConfig::from_toml_str("nudge_step = -2.0").unwrap_err();
        assert!(matches!(
            err,
            RoomplanError::Config(ConfigError::Invalid { field: "nudge_step", .. })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = LayoutConfig::load(Path::new("/nonexistent/roomplan.toml")).unwrap_err();
        assert!(matches!(err, RoomplanError::Config(ConfigError::Io(_))));
    }
}
