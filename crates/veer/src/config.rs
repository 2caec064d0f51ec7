//! Search threshold configuration.
//!
//! Thresholds are resolved in layers, lowest precedence first:
//! a named [`Preset`], an optional YAML config file, environment variables,
//! and finally explicit overrides (usually command-line flags).
//!
//! # Config File
//!
//! ```yaml
//! depth-threshold: 10
//! memory-threshold: 50
//! ```
//!
//! Keys that are absent keep the value from the layer below.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tokio::fs;

/// Depth threshold of the standard preset.
pub const DEFAULT_DEPTH_THRESHOLD: usize = 10;

/// Depth threshold of the deep preset.
pub const DEEP_DEPTH_THRESHOLD: usize = 100;

/// Frontier-size threshold shared by all presets.
pub const DEFAULT_MEMORY_THRESHOLD: usize = 50;

/// Environment variable overriding the depth threshold.
pub const DEPTH_THRESHOLD_ENV: &str = "VEER_DEPTH_THRESHOLD";

/// Environment variable overriding the memory threshold.
pub const MEMORY_THRESHOLD_ENV: &str = "VEER_MEMORY_THRESHOLD";

/// Named threshold presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Preset {
    /// Depth threshold 10, memory threshold 50.
    #[default]
    Standard,

    /// Depth threshold 100, memory threshold 50.
    Deep,
}

impl Preset {
    /// Depth threshold for this preset.
    #[must_use]
    pub fn depth_threshold(self) -> usize {
        match self {
            Self::Standard => DEFAULT_DEPTH_THRESHOLD,
            Self::Deep => DEEP_DEPTH_THRESHOLD,
        }
    }
}

/// Resource thresholds for the search engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SearchConfig {
    /// Maximum path length the depth-first engine expands.
    pub depth_threshold: usize,

    /// Maximum queue length the breadth-first engine tolerates before expanding.
    pub memory_threshold: usize,
}

impl SearchConfig {
    /// Create a configuration with explicit thresholds.
    #[must_use]
    pub fn new(depth_threshold: usize, memory_threshold: usize) -> Self {
        Self {
            depth_threshold,
            memory_threshold,
        }
    }

    /// Create a configuration from a named preset.
    #[must_use]
    pub fn from_preset(preset: Preset) -> Self {
        Self::new(preset.depth_threshold(), DEFAULT_MEMORY_THRESHOLD)
    }

    /// Parse a configuration from YAML. Absent keys take the standard preset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the YAML is malformed.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Self::default().with_yaml_str(content)
    }

    /// Layer the keys present in a YAML document over this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the YAML is malformed.
    pub fn with_yaml_str(self, content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(self);
        }
        let file: ConfigFile =
            serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        Ok(self.with_overrides(file.depth_threshold, file.memory_threshold))
    }

    /// Load configuration from a YAML file over the standard preset.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is malformed.
    pub async fn load(path: &Path) -> Result<Self> {
        Self::default().with_file(path).await
    }

    /// Layer a YAML config file over this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is malformed.
    pub async fn with_file(self, path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let config = self.with_yaml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded search config");
        Ok(config)
    }

    /// Apply `VEER_DEPTH_THRESHOLD` and `VEER_MEMORY_THRESHOLD` if set.
    ///
    /// Invalid values are logged and ignored.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_lookup_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup (the environment, in production).
    #[must_use]
    pub fn with_lookup_overrides<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let depth_threshold = parse_threshold(DEPTH_THRESHOLD_ENV, &lookup);
        let memory_threshold = parse_threshold(MEMORY_THRESHOLD_ENV, &lookup);
        self.with_overrides(depth_threshold, memory_threshold)
    }

    /// Replace whichever thresholds are given.
    #[must_use]
    pub fn with_overrides(
        mut self,
        depth_threshold: Option<usize>,
        memory_threshold: Option<usize>,
    ) -> Self {
        if let Some(depth) = depth_threshold {
            self.depth_threshold = depth;
        }
        if let Some(memory) = memory_threshold {
            self.memory_threshold = memory;
        }
        self
    }
}

/// On-disk shape of the config file; every key is optional.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct ConfigFile {
    depth_threshold: Option<usize>,
    memory_threshold: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Standard)
    }
}

fn parse_threshold<F>(key: &str, lookup: &F) -> Option<usize>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => match value.trim().parse() {
            Ok(threshold) => Some(threshold),
            Err(_) => {
                tracing::warn!(
                    env_var = key,
                    value = %value,
                    "Invalid threshold (expected a non-negative integer), ignoring"
                );
                None
            }
        },
        _ => None,
    }
}
