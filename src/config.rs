//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/pmtree/pmtree.toml`
//! 3. Local config: the file passed to [`Settings::load`]
//! 4. Environment variables: `PMTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::de::{value::StrDeserializer, DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Serialize};

use crate::application::services::RankStrategy;
use crate::application::ApplicationError;
use crate::domain::BuildStrategy;

/// Largest input whose n! still fits the rank arithmetic.
pub const MAX_SUPPORTED_SYMBOLS: usize = 20;

/// Unified configuration for pmtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Longest input the service will build a tree for (default: 10)
    pub max_symbols: usize,
    /// Tree construction strategy (default: recursive)
    pub build_strategy: BuildStrategy,
    /// Rank lookup strategy (default: decode)
    pub rank_strategy: RankStrategy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_symbols: 10,
            build_strategy: BuildStrategy::default(),
            rank_strategy: RankStrategy::default(),
        }
    }
}

/// Raw settings for intermediate parsing (None means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub max_symbols: Option<usize>,
    pub build_strategy: Option<BuildStrategy>,
    pub rank_strategy: Option<RankStrategy>,
}

/// Get the XDG config directory for pmtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "pmtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("pmtree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            max_symbols: overlay.max_symbols.unwrap_or(self.max_symbols),
            build_strategy: overlay.build_strategy.unwrap_or(self.build_strategy),
            rank_strategy: overlay.rank_strategy.unwrap_or(self.rank_strategy),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local` - Optional local config file; ignored if it does not exist
    ///
    /// # Errors
    /// Unreadable or malformed files, unparsable `PMTREE_*` values, and a
    /// `max_symbols` above [`MAX_SUPPORTED_SYMBOLS`] yield `ApplicationError::Config`.
    pub fn load(local: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Local config
        if let Some(local_path) = local {
            if local_path.exists() {
                let raw = load_raw_settings(local_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 4. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        current.validate()?;
        Ok(current)
    }

    /// Apply PMTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("PMTREE").prefix_separator("_"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("max_symbols") {
            settings.max_symbols = val.trim().parse().map_err(|e| ApplicationError::Config {
                message: format!("PMTREE_MAX_SYMBOLS={val}: {e}"),
            })?;
        }
        if let Ok(val) = config.get_string("build_strategy") {
            settings.build_strategy = parse_variant("PMTREE_BUILD_STRATEGY", &val)?;
        }
        if let Ok(val) = config.get_string("rank_strategy") {
            settings.rank_strategy = parse_variant("PMTREE_RANK_STRATEGY", &val)?;
        }

        Ok(settings)
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        if self.max_symbols > MAX_SUPPORTED_SYMBOLS {
            return Err(ApplicationError::Config {
                message: format!(
                    "max_symbols = {} exceeds the supported maximum of {}",
                    self.max_symbols, MAX_SUPPORTED_SYMBOLS
                ),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# pmtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/pmtree/pmtree.toml
#   Local:  file passed to Settings::load
#   Env:    PMTREE_* environment variables (explicit overrides)

# Longest input a tree is built for (at most 20)
# max_symbols = 10

# Tree construction: "recursive" or "iterative"
# build_strategy = "recursive"

# Rank lookup: "enumerate", "decode" or "search"
# rank_strategy = "decode"
"#
        .to_string()
    }
}

/// Parse a lowercase unit variant name such as `"iterative"`.
fn parse_variant<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T, ApplicationError> {
    let normalized = raw.trim().to_lowercase();
    let de: StrDeserializer<'_, serde::de::value::Error> = normalized.as_str().into_deserializer();
    T::deserialize(de).map_err(|e| ApplicationError::Config {
        message: format!("{key}={raw}: {e}"),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
