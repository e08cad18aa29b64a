//! Raster configuration with TOML loading.
//!
//! The production raster is 19200×10800 cells; tests and callers with
//! smaller geometry can shrink it. Configuration can come from a TOML file
//! with per-field defaults, so a partial file (or none at all) still yields
//! a working setup:
//!
//! ```toml
//! [raster]
//! rows = 19200
//! cols = 10800
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default raster rows (first index).
const DEFAULT_ROWS: usize = 19200;
/// Default raster columns (second index).
const DEFAULT_COLS: usize = 10800;

fn default_rows() -> usize {
    DEFAULT_ROWS
}

fn default_cols() -> usize {
    DEFAULT_COLS
}

/// Configuration file loading error.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File content is not valid TOML for this schema.
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Raster dimensions for fill calls.
///
/// Every fill call allocates a fresh zeroed raster of these dimensions;
/// nothing is reused across calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterConfig {
    /// Number of rows (x extent).
    #[serde(default = "default_rows")]
    pub rows: usize,

    /// Number of columns (y extent).
    #[serde(default = "default_cols")]
    pub cols: usize,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

impl RasterConfig {
    /// Configuration with explicit dimensions.
    pub fn with_dims(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load from the default config path (`configs/chitra.toml`), falling
    /// back to built-in defaults when the file does not exist.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Path::new("configs/chitra.toml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        #[derive(Deserialize)]
        struct FileSchema {
            #[serde(default)]
            raster: Option<RasterConfig>,
        }

        let file: FileSchema = toml::from_str(toml_str)?;
        Ok(file.raster.unwrap_or_default())
    }

    /// Memory required by one raster allocation, in bytes.
    pub fn raster_bytes(&self) -> usize {
        self.rows * self.cols
    }
}
