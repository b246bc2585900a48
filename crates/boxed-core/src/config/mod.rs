//! # Configuration System
//!
//! Hierarchical TOML configuration for the Boxed shell.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.boxed/config.toml` (global user preferences)
//! 3. **Project config** - `./.boxed/config.toml` (directory-specific overrides)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.boxed/config.toml
//! [window]
//! title = "Boxed"
//! width = 1440
//! height = 900
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use boxed_core::config::BoxedConfig;
//!
//! fn example() -> Result<(), boxed_core::ConfigError> {
//!     let config = BoxedConfig::load_hierarchy()?;
//!     println!("{}x{}", config.window.width(), config.window.height());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use types::{BoxedConfig, WindowConfig};
pub use validation::validate_config;

impl BoxedConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
