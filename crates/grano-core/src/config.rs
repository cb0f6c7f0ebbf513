//! Audio configuration.
//!
//! Every rate- or channel-dependent operation in the workspace takes an
//! explicit [`AudioConfig`] rather than consulting process-wide globals, so
//! independent render pipelines can run with independent settings.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading, saving, or validating a config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// The configuration contains an out-of-range value.
    #[error("invalid config: {reason}")]
    Invalid {
        /// Description of the offending value.
        reason: String,
    },
}

/// Sample rate, channel layout, and grain size for a render pipeline.
///
/// Configs are stored as TOML:
///
/// ```toml
/// sample_rate = 44100
/// channels = 2
/// grain_frames = 64
/// ```
///
/// Defaults match the classic render setup: 44.1 kHz, stereo, 64-frame
/// grains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Sample rate in Hz. Must be nonzero.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Number of interleaved channels per frame. Must be nonzero.
    #[serde(default = "default_channels")]
    pub channels: u16,

    /// Grain window used by the grain-based applicators, in frames.
    /// Must be nonzero.
    #[serde(default = "default_grain_frames")]
    pub grain_frames: usize,
}

fn default_sample_rate() -> u32 {
    44100
}

fn default_channels() -> u16 {
    2
}

fn default_grain_frames() -> usize {
    64
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            channels: default_channels(),
            grain_frames: default_grain_frames(),
        }
    }
}

impl AudioConfig {
    /// Create a validated config with the default grain size.
    pub fn new(sample_rate: u32, channels: u16) -> Result<Self, ConfigError> {
        let config = Self {
            sample_rate,
            channels,
            grain_frames: default_grain_frames(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the grain window, keeping the config validated.
    pub fn with_grain_frames(mut self, grain_frames: usize) -> Result<Self, ConfigError> {
        self.grain_frames = grain_frames;
        self.validate()?;
        Ok(self)
    }

    /// Check every field against its allowed range.
    ///
    /// A zero sample rate or channel count would turn the unit conversions
    /// into divisions by zero, so both are rejected here instead of being
    /// allowed to propagate infinities downstream.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_rate == 0 {
            return Err(ConfigError::Invalid {
                reason: "sample_rate must be nonzero".to_string(),
            });
        }
        if self.channels == 0 {
            return Err(ConfigError::Invalid {
                reason: "channels must be nonzero".to_string(),
            });
        }
        if self.grain_frames == 0 {
            return Err(ConfigError::Invalid {
                reason: "grain_frames must be nonzero".to_string(),
            });
        }
        Ok(())
    }

    /// Load a config from a TOML file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(
            sample_rate = config.sample_rate,
            channels = config.channels,
            "loaded audio config from {}",
            path.display()
        );
        Ok(config)
    }

    /// Parse a config from a TOML string and validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: AudioConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the config to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
