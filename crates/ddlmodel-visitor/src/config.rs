use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

/// Environment variable holding the source prefix, e.g. the DDL file name
pub const SOURCE_PREFIX_ENV: &str = "DDLMODEL_SOURCE_PREFIX";

/// Environment variable enabling visit tracing
pub const DEBUG_ENV: &str = "DDLMODEL_DEBUG";

/// Visitor settings owned by the caller
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VisitorConfig {
    /// Identifies the DDL source in diagnostics
    #[serde(default)]
    pub source_prefix: Option<String>,

    /// Emit a trace line for every visited production
    #[serde(default)]
    pub debug: bool,
}

impl VisitorConfig {
    /// Parse configuration from a TOML document
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse visitor config: {}", e))
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read visitor config {}: {}", path.display(), e)
        })?;
        Self::from_toml_str(&content)
    }

    /// Read `DDLMODEL_SOURCE_PREFIX` and `DDLMODEL_DEBUG` from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let source_prefix = lookup(SOURCE_PREFIX_ENV).filter(|prefix| !prefix.is_empty());
        let debug = lookup(DEBUG_ENV).map(|value| parse_flag(&value)).unwrap_or(false);
        VisitorConfig { source_prefix, debug }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
