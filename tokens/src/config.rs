//! Token patterns loaded from a TOML file.
//!
//! ```toml
//! include_defaults = true
//!
//! [[patterns]]
//! kind = "issue"
//! regex = '#(?<value>\d+)'
//! color = "yellow"
//! ```

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::defaults::default_pattern_specs;
use crate::error::ConfigError;
use crate::error::PatternError;
use crate::pattern::PatternSpec;
use crate::registry::TokenRegistry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternsFile {
    /// Register the built-in `file` and `code` patterns ahead of the ones
    /// listed here.
    #[serde(default = "default_include_defaults")]
    pub include_defaults: bool,
    #[serde(default)]
    pub patterns: Vec<PatternSpec>,
}

fn default_include_defaults() -> bool {
    true
}

impl Default for PatternsFile {
    fn default() -> Self {
        Self {
            include_defaults: default_include_defaults(),
            patterns: Vec::new(),
        }
    }
}

impl PatternsFile {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading token patterns");
        Self::from_toml(&contents)
    }

    /// Builds the registry, skipping patterns that fail validation.
    pub fn into_registry(self) -> (TokenRegistry, Vec<PatternError>) {
        let specs = if self.include_defaults {
            let mut specs = default_pattern_specs();
            specs.extend(self.patterns);
            specs
        } else {
            self.patterns
        };
        TokenRegistry::from_specs(specs)
    }
}

/// Loads a registry from `path`, or the built-in registry when no path is given.
pub fn load_registry(path: Option<&Path>) -> Result<(TokenRegistry, Vec<PatternError>), ConfigError> {
    let file = match path {
        Some(path) => PatternsFile::load(path)?,
        None => PatternsFile::default(),
    };
    Ok(file.into_registry())
}
