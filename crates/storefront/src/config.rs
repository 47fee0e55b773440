//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `KALARTZ_DATA_DIR` - Directory for the persisted state documents
//!   (default: `.kalartz`)
//! - `RUST_LOG` - Log filter, consumed by [`crate::telemetry::init`]

use std::path::PathBuf;

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory the file-backed storage keeps its documents in.
    pub data_dir: PathBuf,
}

impl StorefrontConfig {
    /// Data directory used when `KALARTZ_DATA_DIR` is not set.
    pub const DEFAULT_DATA_DIR: &'static str = ".kalartz";

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    #[must_use]
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = std::env::var("KALARTZ_DATA_DIR")
            .map_or_else(|_| PathBuf::from(Self::DEFAULT_DATA_DIR), PathBuf::from);

        Self { data_dir }
    }

    /// Configuration rooted at an explicit data directory.
    #[must_use]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
        }
    }
}
