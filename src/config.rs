use crate::cli::output::OutputFormat;
use crate::Style;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".recase.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub style: Style,
    pub format: OutputFormat,
    pub color: bool,
    pub skip_invalid: bool,
}

/// One config file; a missing key leaves the lower layer untouched
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    style: Option<Style>,
    format: Option<OutputFormat>,
    color: Option<bool>,
    skip_invalid: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: Style::default(),
            format: OutputFormat::default(),
            color: true,
            skip_invalid: false,
        }
    }
}

/// Values given on the command line; `None` means "not given"
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_path: Option<PathBuf>,
    pub style: Option<Style>,
    pub format: Option<OutputFormat>,
    pub no_color: bool,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let global_path = overrides
            .config_path
            .clone()
            .or_else(Self::global_config_path);
        Self::load_layers(global_path.as_deref(), Path::new(LOCAL_CONFIG_FILE), overrides)
    }

    fn load_layers(global: Option<&Path>, local: &Path, overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = global {
            if global_path.exists() {
                let global_config = Self::from_file(global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        if local.exists() {
            let local_config = Self::from_file(local)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if let Some(style) = overrides.style {
            config.style = style;
        }
        if let Some(format) = overrides.format {
            config.format = format;
        }
        if overrides.no_color {
            config.color = false;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<FileConfig> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, layer: FileConfig) -> Self {
        if let Some(style) = layer.style {
            self.style = style;
        }
        if let Some(format) = layer.format {
            self.format = format;
        }
        if let Some(color) = layer.color {
            self.color = color;
        }
        if let Some(skip_invalid) = layer.skip_invalid {
            self.skip_invalid = skip_invalid;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
