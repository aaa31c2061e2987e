//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/boxtree/boxtree.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `BOXTREE_*` prefix
//!
//! Command line flags are applied on top by the CLI.

use std::path::{Path, PathBuf};

use config::{Config, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::{SettingsError, SettingsResult};
use crate::options::{
    limit_from_int, Color, Orientation, RenderOptions, DEFAULT_RECURSION_LIMIT,
};

const ENV_PREFIX: &str = "BOXTREE";

/// Unified configuration for boxtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Node color (default: blue)
    pub color: Color,
    /// Draw full boxes around every node
    pub border: bool,
    /// Print line breaks in labels as `\n`
    pub escape_newlines: bool,
    /// Truncate labels after this many characters, -1 = unlimited
    pub trim_length: i64,
    /// Stop descending at this depth, -1 = unlimited
    pub max_depth: i64,
    /// Only `vertical` is implemented
    pub orientation: Orientation,
    /// Nesting beyond this is reported as a suspected cycle
    pub recursion_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: Color::Blue,
            border: false,
            escape_newlines: false,
            trim_length: -1,
            max_depth: -1,
            orientation: Orientation::Vertical,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

/// Raw settings for intermediate parsing; `None` means "not specified".
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub color: Option<Color>,
    pub border: Option<bool>,
    pub escape_newlines: Option<bool>,
    pub trim_length: Option<i64>,
    pub max_depth: Option<i64>,
    pub orientation: Option<Orientation>,
    pub recursion_limit: Option<usize>,
}

/// Get the XDG config directory for boxtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "boxtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("boxtree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> SettingsResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| SettingsError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| SettingsError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            color: overlay.color.unwrap_or(self.color),
            border: overlay.border.unwrap_or(self.border),
            escape_newlines: overlay.escape_newlines.unwrap_or(self.escape_newlines),
            trim_length: overlay.trim_length.unwrap_or(self.trim_length),
            max_depth: overlay.max_depth.unwrap_or(self.max_depth),
            orientation: overlay.orientation.unwrap_or(self.orientation),
            recursion_limit: overlay.recursion_limit.unwrap_or(self.recursion_limit),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file given on the command line; unlike
    ///   the global file it must exist
    #[instrument(level = "debug")]
    pub fn load(explicit: Option<&Path>) -> SettingsResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!(path = %global_path.display(), "loading global config");
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading explicit config");
            current = current.merge_with(&load_raw_settings(path)?);
        }

        current.apply_env_overrides(Environment::with_prefix(ENV_PREFIX))
    }

    /// Apply BOXTREE_* variables from `source` as explicit overrides.
    pub fn apply_env_overrides(self, source: Environment) -> SettingsResult<Self> {
        let config = Config::builder()
            .add_source(source.prefix_separator("_").separator("__"))
            .build()
            .map_err(|e| SettingsError::Config(e.to_string()))?;

        let mut raw = RawSettings::default();
        if let Ok(val) = config.get_string("color") {
            raw.color = Some(parse_value("color", &val)?);
        }
        if let Ok(val) = config.get_string("orientation") {
            raw.orientation = Some(parse_value("orientation", &val)?);
        }
        if let Ok(val) = config.get_string("border") {
            raw.border = Some(parse_bool("border", &val)?);
        }
        if let Ok(val) = config.get_string("escape_newlines") {
            raw.escape_newlines = Some(parse_bool("escape_newlines", &val)?);
        }
        if let Ok(val) = config.get_string("trim_length") {
            raw.trim_length = Some(parse_value("trim_length", &val)?);
        }
        if let Ok(val) = config.get_string("max_depth") {
            raw.max_depth = Some(parse_value("max_depth", &val)?);
        }
        if let Ok(val) = config.get_string("recursion_limit") {
            raw.recursion_limit = Some(parse_value("recursion_limit", &val)?);
        }
        Ok(self.merge_with(&raw))
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> SettingsResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| SettingsError::Config(format!("serialize config: {e}")))
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            color: self.color,
            border: self.border,
            escape_newlines: self.escape_newlines,
            trim_length: limit_from_int(self.trim_length),
            max_depth: limit_from_int(self.max_depth),
            orientation: self.orientation,
            recursion_limit: self.recursion_limit,
        }
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# boxtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/boxtree/boxtree.toml
#   File:   --config <FILE> (or BOXTREE_CONFIG)
#   Env:    BOXTREE_* environment variables (e.g. BOXTREE_COLOR=none)
#   Flags:  command line options

# red, green, yellow, blue, pink, light-blue, white or none
# color = "blue"

# Draw a full box around every node
# border = false

# Show line breaks inside labels as \n
# escape_newlines = false

# Truncate labels after N characters (-1 = unlimited)
# trim_length = -1

# Do not draw nodes below this depth (-1 = unlimited)
# max_depth = -1

# Only "vertical" is implemented
# orientation = "vertical"

# Deeper trees are rejected as suspected cycles
# recursion_limit = 512
"#
        .to_string()
    }
}

impl From<&Settings> for RenderOptions {
    fn from(settings: &Settings) -> Self {
        settings.render_options()
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> SettingsResult<T> {
    value.trim().parse().map_err(|_| SettingsError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_bool(key: &str, value: &str) -> SettingsResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SettingsError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn given_no_overlay_when_merging_then_keeps_defaults() {
        let settings = Settings::default().merge_with(&RawSettings::default());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn given_overlay_when_merging_then_specified_values_win() {
        let overlay = RawSettings {
            color: Some(Color::None),
            trim_length: Some(10),
            ..Default::default()
        };
        let settings = Settings::default().merge_with(&overlay);
        assert_eq!(settings.color, Color::None);
        assert_eq!(settings.trim_length, 10);
        assert_eq!(settings.max_depth, -1);
    }

    #[test]
    fn given_env_vars_when_applying_overrides_then_replaces_values() {
        let settings = Settings::default()
            .apply_env_overrides(env(&[
                ("BOXTREE_COLOR", "light-blue"),
                ("BOXTREE_BORDER", "true"),
                ("BOXTREE_MAX_DEPTH", "2"),
            ]))
            .unwrap();
        assert_eq!(settings.color, Color::LightBlue);
        assert!(settings.border);
        assert_eq!(settings.max_depth, 2);
        assert!(!settings.escape_newlines);
    }

    #[test]
    fn given_bad_env_value_when_applying_overrides_then_invalid_value_error() {
        let err = Settings::default()
            .apply_env_overrides(env(&[("BOXTREE_COLOR", "mauve")]))
            .unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { ref key, .. } if key == "color"));
    }

    #[test]
    fn given_negative_limits_when_converting_then_unlimited_options() {
        let options = Settings::default().render_options();
        assert_eq!(options.trim_length, None);
        assert_eq!(options.max_depth, None);
        assert_eq!(options.color, Color::Blue);
    }

    #[test]
    fn given_settings_when_serializing_then_round_trips_through_toml() {
        let settings = Settings {
            color: Color::Pink,
            trim_length: 8,
            ..Default::default()
        };
        let text = settings.to_toml().unwrap();
        assert!(text.contains("color = \"pink\""));
        let raw: RawSettings = toml::from_str(&text).unwrap();
        assert_eq!(Settings::default().merge_with(&raw), settings);
    }

    #[test]
    fn given_template_when_parsing_then_is_valid_toml_with_defaults() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert_eq!(Settings::default().merge_with(&raw), Settings::default());
    }
}
