//! Shared configuration loader for the md2x toolchain.
//!
//! `defaults/md2x.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`Md2xConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use md2x_engine::{CodeStyle, ConvertOptions, Glyphs, Mode};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/md2x.default.toml");

/// Name of the optional project-level configuration file.
pub const PROJECT_CONFIG_FILE: &str = "md2x.toml";

/// Top-level configuration consumed by md2x applications.
#[derive(Debug, Clone, Deserialize)]
pub struct Md2xConfig {
    pub convert: ConvertConfig,
    pub thread: ThreadConfig,
    pub glyphs: Glyphs,
}

/// Conversion knobs shared by both output modes.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub mode: Mode,
    pub keep_links: bool,
    pub code_style: CodeStyle,
}

/// Thread mode knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ThreadConfig {
    pub max_length: usize,
    pub output: ThreadOutput,
}

/// How thread segments are serialized by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ThreadOutput {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "numbered")]
    Numbered,
}

impl From<&Md2xConfig> for ConvertOptions {
    fn from(config: &Md2xConfig) -> Self {
        ConvertOptions {
            mode: config.convert.mode,
            keep_links: config.convert.keep_links,
            code_style: config.convert.code_style,
            max_length: config.thread.max_length,
            glyphs: config.glyphs.clone(),
        }
    }
}

impl From<Md2xConfig> for ConvertOptions {
    fn from(config: Md2xConfig) -> Self {
        ConvertOptions {
            mode: config.convert.mode,
            keep_links: config.convert.keep_links,
            code_style: config.convert.code_style,
            max_length: config.thread.max_length,
            glyphs: config.glyphs,
        }
    }
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

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
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
    pub fn build(self) -> Result<Md2xConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<Md2xConfig, ConfigError> {
    Loader::new().build()
}
