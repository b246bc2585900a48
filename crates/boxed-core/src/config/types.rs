//! Configuration type definitions.
//!
//! These types are deserialized from TOML config files. Every field is
//! optional so that a project config can override a single value from the
//! user config; accessors fill in the built-in defaults.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Main configuration loaded from TOML config files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxedConfig {
    /// Main window geometry and title
    #[serde(default)]
    pub window: WindowConfig,
}

/// Main window configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Text shown in the custom title bar.
    /// Default: "Boxed".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Initial window width in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Initial window height in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<u32>,
}

impl WindowConfig {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(defaults::DEFAULT_TITLE)
    }

    pub fn width(&self) -> u32 {
        self.width.unwrap_or(defaults::DEFAULT_WIDTH)
    }

    pub fn height(&self) -> u32 {
        self.height.unwrap_or(defaults::DEFAULT_HEIGHT)
    }

    pub fn min_width(&self) -> u32 {
        self.min_width.unwrap_or(defaults::DEFAULT_MIN_WIDTH)
    }

    pub fn min_height(&self) -> u32 {
        self.min_height.unwrap_or(defaults::DEFAULT_MIN_HEIGHT)
    }
}
