//! Page configuration.
//!
//! Timing and scroll thresholds live in a TOML file so they can be tuned
//! without code changes. Every field has a default, so an empty file (or no
//! file at all) yields the reference behaviour.
//!
//! ```
//! use carepage_core::config::PageConfig;
//! use std::time::Duration;
//!
//! let config = PageConfig::from_toml_str(r#"
//!     analysis_delay_ms = 500
//!     nav_offset_px = 64
//! "#).unwrap();
//!
//! assert_eq!(config.analysis_delay(), Duration::from_millis(500));
//! assert_eq!(config.nav_offset_px, 64);
//! assert_eq!(config.shadow_threshold_px, 10);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Artificial latency before a symptom analysis completes.
    pub analysis_delay_ms: u64,

    /// Height of the fixed navbar; anchor scrolls stop this far above a section.
    pub nav_offset_px: u32,

    /// Navbar gets a shadow once scrolled past this.
    pub shadow_threshold_px: u32,

    /// Navbar hides when scrolling down past this.
    pub hide_threshold_px: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            analysis_delay_ms: 2000,
            nav_offset_px: 80,
            shadow_threshold_px: 10,
            hide_threshold_px: 100,
        }
    }
}

impl PageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hide_threshold_px < self.shadow_threshold_px {
            return Err(ConfigError::Invalid(format!(
                "hide_threshold_px ({}) must not be below shadow_threshold_px ({})",
                self.hide_threshold_px, self.shadow_threshold_px
            )));
        }
        Ok(())
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    pub fn with_analysis_delay_ms(mut self, ms: u64) -> Self {
        self.analysis_delay_ms = ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_page() {
        let c = PageConfig::default();
        assert_eq!(c.analysis_delay(), Duration::from_secs(2));
        assert_eq!(c.nav_offset_px, 80);
        assert_eq!(c.shadow_threshold_px, 10);
        assert_eq!(c.hide_threshold_px, 100);
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let c = PageConfig::from_toml_str("").unwrap();
        assert_eq!(c, PageConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = PageConfig::from_toml_str("analysis_delay = 5").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn inverted_thresholds_are_invalid() {
        let err = PageConfig::from_toml_str(
            r#"
            shadow_threshold_px = 200
            hide_threshold_px = 100
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = PageConfig::load("/definitely/not/here/carepage.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
