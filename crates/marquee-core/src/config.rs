use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Upper bound for the demo's item count slider
pub const MAX_ITEM_COUNT: f64 = 1000.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub marquee: MarqueeConfig,
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (holds the log file)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Marquee engine parameters
///
/// Lengths are in terminal columns, velocity in columns per second.
/// A positive velocity moves the content to the left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarqueeConfig {
    /// Scroll velocity (negative scrolls to the right)
    #[serde(default = "default_velocity")]
    pub velocity: f64,
    /// Gap between adjacent items and between tiled copies
    #[serde(default = "default_spacing")]
    pub spacing: f64,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            velocity: default_velocity(),
            spacing: default_spacing(),
        }
    }
}

/// Slider ranges and starting values for the demo screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_velocity_min")]
    pub velocity_min: f64,
    #[serde(default = "default_velocity_max")]
    pub velocity_max: f64,
    /// Amount one key press moves the velocity slider
    #[serde(default = "default_velocity_step")]
    pub velocity_step: f64,
    #[serde(default = "default_item_count_min")]
    pub item_count_min: f64,
    #[serde(default = "default_item_count_max")]
    pub item_count_max: f64,
    /// Starting item count (truncated to an integer)
    #[serde(default = "default_item_count")]
    pub item_count: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            velocity_min: default_velocity_min(),
            velocity_max: default_velocity_max(),
            velocity_step: default_velocity_step(),
            item_count_min: default_item_count_min(),
            item_count_max: default_item_count_max(),
            item_count: default_item_count(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Frames per second for the animation loop
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Draw the raw scroll offset over the marquee
    #[serde(default)]
    pub show_offset: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            animation_fps: default_animation_fps(),
            show_offset: false,
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("marquee")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_velocity() -> f64 {
    50.0
}

fn default_spacing() -> f64 {
    10.0
}

fn default_velocity_min() -> f64 {
    -300.0
}

fn default_velocity_max() -> f64 {
    300.0
}

fn default_velocity_step() -> f64 {
    10.0
}

fn default_item_count_min() -> f64 {
    1.0
}

fn default_item_count_max() -> f64 {
    20.0
}

fn default_item_count() -> f64 {
    5.0
}

fn default_animation_fps() -> u32 {
    60
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from a specific file, falling back to defaults
    /// when the file does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)?
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Serialize configuration to pretty TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Reject values the marquee and demo cannot work with
    pub fn validate(&self) -> crate::Result<()> {
        let marquee = &self.marquee;
        if !marquee.velocity.is_finite() {
            return Err(crate::Error::Config(format!(
                "marquee.velocity must be finite, got {}",
                marquee.velocity
            )));
        }
        if !marquee.spacing.is_finite() || marquee.spacing < 0.0 {
            return Err(crate::Error::Config(format!(
                "marquee.spacing must be a non-negative number, got {}",
                marquee.spacing
            )));
        }

        let demo = &self.demo;
        for (name, value) in [
            ("velocity_min", demo.velocity_min),
            ("velocity_max", demo.velocity_max),
            ("velocity_step", demo.velocity_step),
            ("item_count_min", demo.item_count_min),
            ("item_count_max", demo.item_count_max),
            ("item_count", demo.item_count),
        ] {
            if !value.is_finite() {
                return Err(crate::Error::Config(format!(
                    "demo.{} must be finite, got {}",
                    name, value
                )));
            }
        }
        if demo.velocity_step <= 0.0 {
            return Err(crate::Error::Config(format!(
                "demo.velocity_step must be positive, got {}",
                demo.velocity_step
            )));
        }
        if demo.velocity_min > demo.velocity_max {
            return Err(crate::Error::Config(format!(
                "demo velocity range is empty: [{}, {}]",
                demo.velocity_min, demo.velocity_max
            )));
        }
        if demo.item_count_min > demo.item_count_max {
            return Err(crate::Error::Config(format!(
                "demo item count range is empty: [{}, {}]",
                demo.item_count_min, demo.item_count_max
            )));
        }
        if demo.item_count_min < 1.0 {
            return Err(crate::Error::Config(format!(
                "demo.item_count_min must be at least 1, got {}",
                demo.item_count_min
            )));
        }
        if demo.item_count_max > MAX_ITEM_COUNT {
            return Err(crate::Error::Config(format!(
                "demo.item_count_max must be at most {}, got {}",
                MAX_ITEM_COUNT, demo.item_count_max
            )));
        }

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/marquee/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("marquee")
            .join("config.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("marquee.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.marquee.velocity, 50.0);
        assert_eq!(config.marquee.spacing, 10.0);
        assert_eq!(config.demo.velocity_min, -300.0);
        assert_eq!(config.demo.velocity_max, 300.0);
        assert_eq!(config.demo.item_count_min, 1.0);
        assert_eq!(config.demo.item_count_max, 20.0);
        assert_eq!(config.demo.item_count, 5.0);
        assert_eq!(config.ui.animation_fps, 60);
        assert!(!config.ui.show_offset);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [marquee]
            velocity = -120.0

            [ui]
            show_offset = true
            "#,
        )
        .unwrap();

        assert_eq!(config.marquee.velocity, -120.0);
        assert_eq!(config.marquee.spacing, 10.0);
        assert!(config.ui.show_offset);
        assert_eq!(config.ui.animation_fps, 60);
        assert_eq!(config.demo, DemoConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("[marquee]\nvelocity = \"fast\"").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_validate_rejects_negative_spacing() {
        let mut config = AppConfig::default();
        config.marquee.spacing = -1.0;
        assert!(matches!(config.validate(), Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_inverted_ranges() {
        let mut config = AppConfig::default();
        config.demo.velocity_min = 10.0;
        config.demo.velocity_max = -10.0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.demo.item_count_min = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_demo_values() {
        for toml in [
            "[demo]\nitem_count_max = inf\n",
            "[demo]\nitem_count_max = nan\n",
            "[demo]\nitem_count = nan\n",
            "[demo]\nvelocity_step = inf\n",
            "[demo]\nvelocity_min = -inf\n",
        ] {
            let config = AppConfig::from_toml(toml).unwrap();
            assert!(
                matches!(config.validate(), Err(crate::Error::Config(_))),
                "accepted {:?}",
                toml
            );
        }
    }

    #[test]
    fn test_validate_caps_item_count() {
        let config = AppConfig::from_toml("[demo]\nitem_count_max = 1e12\n").unwrap();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.demo.item_count_max = MAX_ITEM_COUNT;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_positive_step() {
        let mut config = AppConfig::default();
        config.demo.velocity_step = 0.0;
        assert!(config.validate().is_err());
        config.demo.velocity_step = -5.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_roundtrip_through_file() {
        let dir = std::env::temp_dir().join(format!("marquee-config-{}", std::process::id()));
        let path = dir.join("config.toml");

        let mut config = AppConfig::default();
        config.marquee.spacing = 4.0;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.marquee.spacing, 4.0);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("marquee-does-not-exist/config.toml");
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.marquee, MarqueeConfig::default());
    }
}
