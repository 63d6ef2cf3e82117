//! Popup configuration supplied once at construction

use serde::{Deserialize, Serialize};
use crate::math::Size;

/// Size used when the popup opens
pub const DEFAULT_POPUP_SIZE: Size = Size::new(800.0, 600.0);

/// Smallest size a resize gesture may produce
pub const MIN_POPUP_SIZE: Size = Size::new(400.0, 300.0);

/// Errors found while loading or checking a [`PopupConfig`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A dimension is zero, negative or not finite.
    #[error("{field} must be finite and positive, got {width}x{height}")]
    NonPositive {
        field: &'static str,
        width: f32,
        height: f32,
    },

    /// The minimum size is larger than the size the popup opens with.
    #[error("minimum size {min:?} exceeds default size {default:?}")]
    MinExceedsDefault { min: Size, default: Size },

    /// The JSON document could not be parsed.
    #[error("invalid popup config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for a popup
///
/// Immutable once handed to a controller. Missing JSON fields fall back
/// to [`DEFAULT_POPUP_SIZE`] and [`MIN_POPUP_SIZE`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PopupConfig {
    /// Size the popup takes every time it opens
    pub default_size: Size,
    /// Resize lower bound
    pub min_size: Size,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_POPUP_SIZE,
            min_size: MIN_POPUP_SIZE,
        }
    }
}

impl PopupConfig {
    /// Create a config from default and minimum dimensions
    pub fn new(default_width: f32, default_height: f32, min_width: f32, min_height: f32) -> Self {
        Self {
            default_size: Size::new(default_width, default_height),
            min_size: Size::new(min_width, min_height),
        }
    }

    /// Parse a config from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PopupConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the expectations a host should meet
    ///
    /// The controller itself accepts any config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, size) in [("defaultSize", self.default_size), ("minSize", self.min_size)] {
            if !size.is_positive() {
                return Err(ConfigError::NonPositive {
                    field,
                    width: size.width,
                    height: size.height,
                });
            }
        }

        if self.default_size.is_smaller_than(self.min_size) {
            return Err(ConfigError::MinExceedsDefault {
                min: self.min_size,
                default: self.default_size,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PopupConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.default_size.width - 800.0).abs() < 0.001);
        assert!((config.min_size.height - 300.0).abs() < 0.001);
    }

    #[test]
    fn test_rejects_non_positive() {
        let config = PopupConfig::new(800.0, 0.0, 400.0, 300.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "defaultSize", .. })
        ));

        let config = PopupConfig::new(800.0, 600.0, f32::NAN, 300.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "minSize", .. })
        ));
    }

    #[test]
    fn test_rejects_min_above_default() {
        let config = PopupConfig::new(300.0, 600.0, 400.0, 300.0);
        assert!(matches!(config.validate(), Err(ConfigError::MinExceedsDefault { .. })));
    }

    #[test]
    fn test_from_json_partial() {
        let config = PopupConfig::from_json(r#"{"defaultSize":{"width":640.0,"height":480.0}}"#).unwrap();
        assert!((config.default_size.width - 640.0).abs() < 0.001);
        assert_eq!(config.min_size, MIN_POPUP_SIZE);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(PopupConfig::from_json("not json"), Err(ConfigError::Json(_))));
        assert!(matches!(
            PopupConfig::from_json(r#"{"minSize":{"width":900.0,"height":300.0}}"#),
            Err(ConfigError::MinExceedsDefault { .. })
        ));
    }
}
