// File: src/config.rs
// Purpose: Configuration parsing from rusty-forms.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Library configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormsConfig {
    #[serde(default)]
    pub form: FormConfig,

    #[serde(default)]
    pub html: HtmlConfig,

    #[serde(default)]
    pub obfuscator: ObfuscatorConfig,
}

/// Attributes of generated `<form>` elements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_method")]
    pub method: String,

    #[serde(default = "default_action")]
    pub action: String,
}

/// Markup generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HtmlConfig {
    /// Prefix of ids generated for elements without an explicit id
    #[serde(default = "default_auto_id_prefix")]
    pub auto_id_prefix: String,
}

/// Settings for [`crate::ReferenceObfuscator`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObfuscatorConfig {
    #[serde(default)]
    pub key: u64,

    /// Minimum number of hex digits of a code
    #[serde(default = "default_code_length")]
    pub length: usize,
}

fn default_method() -> String {
    "post".to_string()
}

fn default_action() -> String {
    "/".to_string()
}

fn default_auto_id_prefix() -> String {
    "abc-id-".to_string()
}

fn default_code_length() -> usize {
    8
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            method: default_method(),
            action: default_action(),
        }
    }
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            auto_id_prefix: default_auto_id_prefix(),
        }
    }
}

impl Default for ObfuscatorConfig {
    fn default() -> Self {
        Self {
            key: 0,
            length: default_code_length(),
        }
    }
}

impl FormsConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // A missing or empty file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormsConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        tracing::debug!(?path, "loaded forms configuration");

        Ok(config)
    }

    /// Load configuration from default path (./rusty-forms.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("rusty-forms.toml")
    }
}
