// Configuration for the emphasis engine and output
// Defaults match the reading-aid controls; a TOML file may override any field

use crate::emphasis::{EmphasisParams, Mode, Qualify, Rgb};
use crate::output::OutputFormat;
use serde::Deserialize;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Allowed emphasis ratio; values outside are clamped
pub const RATIO_RANGE: RangeInclusive<f64> = 0.0..=1.0;

/// Allowed minimum word length; values outside are clamped
pub const MIN_LENGTH_RANGE: RangeInclusive<i64> = 0..=64;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Emphasis settings, the `[emphasis]` table of the config file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmphasisConfig {
    /// Portion of each word to emphasize (default 0.5)
    pub ratio: f64,

    /// Minimum word length to modify (default 3)
    pub min_length: i64,

    pub mode: Mode,

    /// Letters only, ignore numbers and symbols (default true)
    pub alpha_only: bool,

    /// Include numbers when letters-only is off (default false)
    pub include_numbers: bool,

    /// Gradient colors (defaults #0000FF → #FF0000)
    pub gradient_start: Rgb,
    pub gradient_end: Rgb,
}

impl Default for EmphasisConfig {
    fn default() -> Self {
        Self {
            ratio: 0.5,
            min_length: 3,
            mode: Mode::BoldPrefix,
            alpha_only: true,
            include_numbers: false,
            gradient_start: Rgb::BLUE,
            gradient_end: Rgb::RED,
        }
    }
}

impl EmphasisConfig {
    /// Builds transform parameters, clamping out-of-range values instead of rejecting them.
    pub fn to_params(&self) -> EmphasisParams {
        let ratio = if self.ratio.is_nan() {
            warn!("emphasis ratio is NaN, using default");
            EmphasisConfig::default().ratio
        } else {
            clamp_logged("ratio", self.ratio, &RATIO_RANGE)
        };
        let min_length = clamp_logged("min_length", self.min_length, &MIN_LENGTH_RANGE);

        EmphasisParams {
            ratio,
            min_length: min_length as usize,
            qualify: Qualify::from_flags(self.alpha_only, self.include_numbers),
            mode: self.mode,
            gradient_start: self.gradient_start,
            gradient_end: self.gradient_end,
        }
    }
}

fn clamp_logged<T>(name: &str, value: T, range: &RangeInclusive<T>) -> T
where
    T: PartialOrd + Copy + std::fmt::Display,
{
    let clamped = if value < *range.start() {
        *range.start()
    } else if value > *range.end() {
        *range.end()
    } else {
        value
    };
    if clamped != value {
        warn!(%value, %clamped, "{name} out of range, clamping");
    }
    clamped
}

/// Output settings, the `[output]` table of the config file
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Master configuration combining all settings
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub emphasis: EmphasisConfig,
    pub output: OutputConfig,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loaded config file");
        Ok(config)
    }
}
