//! Carousel settings, loadable from a TOML file.
//!
//! ```
//! use carousel::config::CarouselConfig;
//!
//! let config = CarouselConfig::from_toml_str("interval_ms = 10000").unwrap();
//! assert_eq!(config.interval_ms, 10000);
//! assert_eq!(config.reveal_ms, 1000);
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_INTERVAL_MS, DEFAULT_REVEAL_MS};
use crate::error::{Error, Result};
use crate::tween::Easing;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Dwell time between automatic advances.
    pub interval_ms: u64,
    /// Crossfade duration; zero commits every change immediately.
    pub reveal_ms: u64,
    pub easing: Easing,
    pub pause_on_hover: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            reveal_ms: DEFAULT_REVEAL_MS,
            easing: Easing::default(),
            pause_on_hover: true,
        }
    }
}

impl CarouselConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<()> {
        if self.interval_ms == 0 {
            return Err(Error::InvalidDelay);
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn reveal_duration(&self) -> Duration {
        Duration::from_millis(self.reveal_ms)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_source_uses_defaults() {
        let config = CarouselConfig::from_toml_str("").unwrap();
        assert_eq!(config, CarouselConfig::default());
        assert_eq!(config.interval(), Duration::from_millis(5000));
        assert_eq!(config.easing, Easing::EaseInOut);
        assert!(config.pause_on_hover);
    }

    #[test]
    fn parses_every_field() {
        let config = CarouselConfig::from_toml_str(
            r#"
            interval_ms = 10000
            reveal_ms = 0
            easing = "linear"
            pause_on_hover = false
            "#,
        )
        .unwrap();
        assert_eq!(config.interval(), Duration::from_secs(10));
        assert_eq!(config.reveal_duration(), Duration::ZERO);
        assert_eq!(config.easing, Easing::Linear);
        assert!(!config.pause_on_hover);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = CarouselConfig::from_toml_str("interval_ms = 0").unwrap_err();
        assert!(matches!(err, Error::InvalidDelay));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = CarouselConfig::from_toml_str("interval_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
        writeln!(file, "interval_ms = 2500").expect("failed to write temp file");

        let config = CarouselConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.interval_ms, 2500);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("absent.toml");
        let err = CarouselConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, Error::Io { path: p, .. } if p == path));
    }
}
