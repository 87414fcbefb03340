//! Configuration loading and management.

use std::fmt;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use kt_core::{Practice, PracticeId, default_practices};
use serde::{Deserialize, Deserializer, Serialize};

/// Application configuration.
///
/// Read-only: the planner never writes configuration back.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// The practice catalogue.
    pub practices: Vec<Practice>,

    /// IDs of practices the user has learned.
    pub learned: Vec<PracticeId>,

    /// Available time used when `suggest` is given no minutes, as free text.
    #[serde(deserialize_with = "scalar_as_text")]
    pub available_time: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("practices", &self.practices.len())
            .field("learned", &self.learned)
            .field("available_time", &self.available_time)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            practices: default_practices(),
            learned: Vec::new(),
            available_time: "60".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (KT_*)
        figment = figment.merge(Env::prefixed("KT_"));

        figment.extract()
    }
}

/// Reads any scalar as text, leaving coercion to `parse_budget`.
///
/// TOML and `KT_*` environment values arrive typed, so `45`, `45.5` and
/// `true` show up as numbers or booleans rather than strings.
fn scalar_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Integer(i64),
        Float(f64),
        Bool(bool),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => text,
        Scalar::Integer(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    })
}

/// Returns the platform-specific config directory for kt.
///
/// On Linux: `~/.config/kt`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("kt"))
}
