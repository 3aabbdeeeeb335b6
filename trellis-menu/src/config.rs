//! Menu configuration.
use serde::{Deserialize, Serialize};

use crate::error::MenuError;

/// Class namespace used when no prefix is configured.
pub const DEFAULT_PREFIX_CLS: &str = "ant-menu";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// CSS class namespace; every generated class starts with it.
    pub prefix_cls: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            prefix_cls: DEFAULT_PREFIX_CLS.to_string(),
        }
    }
}

impl MenuConfig {
    /// Load menu configuration from static assets (function for web compatibility)
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::default()
    }

    /// Get default configuration
    #[must_use]
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Parse configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns [`MenuError::Config`] for malformed JSON and
    /// [`MenuError::InvalidPrefix`] when the prefix cannot be used as a class name.
    pub fn from_json(json: &str) -> Result<Self, MenuError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the prefix is a usable class name.
    ///
    /// # Errors
    /// Returns [`MenuError::InvalidPrefix`] for an empty prefix or one containing
    /// anything other than ASCII alphanumerics, `-` and `_`.
    pub fn validate(&self) -> Result<(), MenuError> {
        let valid = !self.prefix_cls.is_empty()
            && self
                .prefix_cls
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(())
        } else {
            Err(MenuError::InvalidPrefix(self.prefix_cls.clone()))
        }
    }
}
