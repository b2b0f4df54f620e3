use std::sync::OnceLock;

use clubfinder_api::DEFAULT_API_BASE;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

/// The global config.
///
/// It is set once by [`run_with_config`](crate::run_with_config) and lives for the lifetime of
/// the program.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // We never need to resize these, so `Box<str>` saves us 1 * usize of space.
    pub api_base: Box<str>,
    /// The id of the element to mount the app on. `None` mounts on `<body>`.
    pub mountpoint: Option<Box<str>>,
    pub log_level: Option<Box<str>>,
}

impl Config {
    #[inline]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    #[inline]
    pub fn mountpoint(&self) -> Option<&str> {
        self.mountpoint.as_deref()
    }

    /// Returns the configured log level. Unknown or missing levels fall back to `debug`.
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            mountpoint: None,
            log_level: None,
        }
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Returns the global config, or the default config if none was set.
#[inline]
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

/// Sets the global config. Returns the given config back if it was already set.
#[inline]
pub(super) fn set_config(config: Config) -> Result<(), Config> {
    CONFIG.set(config)
}
