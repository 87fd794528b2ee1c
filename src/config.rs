//! Configuration file support for red-formatter.
//!
//! Provides YAML-based defaults through `red-formatter.config.yml` files.
//! Command-line flags always take precedence over values loaded here.

use anyhow::{bail, Context};
use red_formatter::report::domain::Header;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

use red_formatter::shared::Result;

pub const CONFIG_FILENAME: &str = "red-formatter.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub lang: Option<String>,
    pub ui_uri: Option<String>,
    /// Request headers as "Name: value" lines.
    pub request_headers: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed request headers. Entries were checked by `validate_config`.
    pub fn parsed_request_headers(&self) -> Vec<Header> {
        self.request_headers
            .iter()
            .flatten()
            .filter_map(|line| Header::parse(line))
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if format.trim().is_empty() {
            bail!(
                "Invalid config: format must not be empty.\n\n\
                 💡 Hint: Use one of the registered format names (e.g., \"html\", \"txt\", \"har\")."
            );
        }
    }

    if let Some(ref headers) = config.request_headers {
        for (i, line) in headers.iter().enumerate() {
            if Header::parse(line).is_none() {
                bail!(
                    "Invalid config: request_headers[{}] is not a header line: '{}'.\n\n\
                     💡 Hint: Write each request header as \"Name: value\".",
                    i,
                    line
                );
            }
        }
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!(field = %key, "Unknown config field will be ignored");
    }
}
