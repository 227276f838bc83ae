//! Configuration loading for the tome toolchain.
//!
//! `defaults/tome.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user files on top of those
//! defaults via [`Loader`] before deserializing into [`TomeConfig`].
//!
//! A standalone rules file is different: [`load_rules`] reads it with nothing
//! underneath, so a file that forgets a rule category is rejected up front
//! instead of silently inheriting the built-in list.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tome_parser::tome::{ConvertOptions, RuleSet};

const DEFAULT_TOML: &str = include_str!("../defaults/tome.default.toml");

/// Top-level configuration consumed by tome applications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomeConfig {
    pub convert: ConvertOptions,
    pub rules: RuleSet,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Start a loader with no defaults. Every section must come from a layer.
    pub fn bare() -> Self {
        Self {
            builder: Config::builder(),
        }
    }

    /// Layer a configuration file. Missing files trigger an error. The format
    /// follows the file extension.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref()).required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref()).required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TomeConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TomeConfig, ConfigError> {
    Loader::new().build()
}

/// Load a standalone rules file (TOML, JSON or YAML by extension). All five rule
/// categories must be present.
pub fn load_rules(path: impl AsRef<Path>) -> Result<RuleSet, ConfigError> {
    Config::builder()
        .add_source(File::from(path.as_ref()).required(true))
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tome_parser::tome::TrailingFragment;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.convert.preamble_length, 7);
        assert!(!config.convert.extras_enabled);
        assert_eq!(config.convert.trailing_fragment, TrailingFragment::Drop);
        assert_eq!(config.rules.bullet_glyph(), '•');
        assert_eq!(config.rules.preamble_labels()[0], "Classes:");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("convert.trailing_fragment", "flush")
            .expect("override to apply")
            .set_override("convert.preamble_length", 4_i64)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.convert.trailing_fragment, TrailingFragment::Flush);
        assert_eq!(config.convert.preamble_length, 4);
    }

    #[test]
    fn bare_loader_requires_every_section() {
        assert!(Loader::bare().build().is_err());
    }
}
