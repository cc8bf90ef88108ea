use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{DescribeError, Result};

/// Configuration for descriptor derivation.
///
/// Every knob of the tool lives here so the locator and renderer can be
/// exercised in isolation with alternate patterns or lengths.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DescribeConfig {
    /// Tag used when no commit in history carries a matching tag.
    #[serde(default = "default_tag")]
    pub default_tag: String,

    /// Number of leading characters of the HEAD hash in the rendered suffix.
    #[serde(default = "default_abbrev_length")]
    pub abbrev_length: usize,

    /// Anchored regex a tag name must match to count as a release tag.
    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,
}

fn default_tag() -> String {
    "v0.1.0".to_string()
}

fn default_abbrev_length() -> usize {
    7
}

fn default_tag_pattern() -> String {
    r"^v\d+\.\d+\.\d+$".to_string()
}

impl Default for DescribeConfig {
    fn default() -> Self {
        DescribeConfig {
            default_tag: default_tag(),
            abbrev_length: default_abbrev_length(),
            tag_pattern: default_tag_pattern(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `semver-describe.toml` in current directory
/// 3. `.semver-describe.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// A missing file falls back to defaults; a file that exists but cannot be
/// read or parsed is an error.
pub fn load_config(config_path: Option<&str>) -> Result<DescribeConfig> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./semver-describe.toml").exists() {
        fs::read_to_string("./semver-describe.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".semver-describe.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(DescribeConfig::default());
        }
    } else {
        return Ok(DescribeConfig::default());
    };

    let config: DescribeConfig = toml::from_str(&config_str)
        .map_err(|e| DescribeError::config(format!("Cannot parse config: {}", e)))?;
    Ok(config)
}
