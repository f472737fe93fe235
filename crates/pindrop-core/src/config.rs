//! Configuration types for pindrop.
//!
//! Two layers: [`Config::load`] reads `~/.config/pindrop/config.toml`,
//! creating it with hardcoded defaults if it does not yet exist, and the CLI
//! overrides individual values on top. The resolved search values collapse
//! into an immutable [`GeocoderConfig`] validated at construction —
//! the access token is required, everything else is defaulted.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Public geocoding host used when no endpoint is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.tiles.mapbox.com";
/// General places dataset used when no source is configured.
pub const DEFAULT_SOURCE: &str = "mapbox.places";

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
endpoint  = "https://api.tiles.mapbox.com"
source    = "mapbox.places"
proximity = ""
bbox      = ""
types     = ""
# access_token = "pk.…"   # or set MAPBOX_ACCESS_TOKEN / pass --token

[ui]
input_position = "top"
show_loader    = false
placeholder    = "Search"
"#;

// ---------------------------------------------------------------------------
// File config
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from
/// `~/.config/pindrop/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default)]
    pub proximity: String,
    #[serde(default)]
    pub bbox: String,
    #[serde(default)]
    pub types: String,
    /// Optional here; resolution fails later if no layer supplies one.
    #[serde(default)]
    pub access_token: Option<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}
fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            source: default_source(),
            proximity: String::new(),
            bbox: String::new(),
            types: String::new(),
            access_token: None,
        }
    }
}

/// Where the search input sits relative to the suggestion list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPosition {
    #[default]
    Top,
    Bottom,
}

impl std::str::FromStr for InputPosition {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(InputPosition::Top),
            "bottom" => Ok(InputPosition::Bottom),
            other => Err(ConfigError::InvalidInputPosition(other.to_string())),
        }
    }
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub input_position: InputPosition,
    #[serde(default)]
    pub show_loader: bool,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_placeholder() -> String {
    "Search".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            input_position: InputPosition::Top,
            show_loader: false,
            placeholder: default_placeholder(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/pindrop/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load from an explicit path, creating it with defaults when missing.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("pindrop")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Resolved geocoder config
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("an access token is required (--token, MAPBOX_ACCESS_TOKEN, or config.toml)")]
    MissingAccessToken,
    #[error("invalid input position {0:?} (expected \"top\" or \"bottom\")")]
    InvalidInputPosition(String),
}

/// Immutable request parameters for the geocoding API, validated at
/// construction. Optional values are modelled as empty strings, mirroring the
/// request contract: a parameter is appended to the URI iff it is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocoderConfig {
    pub endpoint: String,
    pub source: String,
    pub access_token: String,
    pub proximity: String,
    pub bbox: String,
    pub types: String,
}

impl GeocoderConfig {
    /// Build a config with the given token and every other value defaulted.
    pub fn new(access_token: impl Into<String>) -> Result<Self, ConfigError> {
        let access_token = access_token.into();
        if access_token.is_empty() {
            return Err(ConfigError::MissingAccessToken);
        }
        Ok(Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            source: DEFAULT_SOURCE.to_string(),
            access_token,
            proximity: String::new(),
            bbox: String::new(),
            types: String::new(),
        })
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_proximity(mut self, proximity: impl Into<String>) -> Self {
        self.proximity = proximity.into();
        self
    }

    pub fn with_bbox(mut self, bbox: impl Into<String>) -> Self {
        self.bbox = bbox.into();
        self
    }

    pub fn with_types(mut self, types: impl Into<String>) -> Self {
        self.types = types.into();
        self
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
