//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.boxed/config.toml`
//! 3. **Project config** - `./.boxed/config.toml`

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::config::types::{BoxedConfig, WindowConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed,
/// or if the merged configuration fails validation. Missing config files
/// are not errors.
pub fn load_hierarchy() -> Result<BoxedConfig, ConfigError> {
    let mut paths = Vec::with_capacity(2);
    match dirs::home_dir() {
        Some(home) => paths.push(config_path_in(&home)),
        None => debug!(
            event = "core.config.user_config_skipped",
            reason = "home directory unavailable"
        ),
    }
    paths.push(config_path_in(&std::env::current_dir()?));

    load_from_paths(&paths)
}

/// Load and merge config files in order, later files taking precedence.
pub fn load_from_paths(paths: &[PathBuf]) -> Result<BoxedConfig, ConfigError> {
    let mut config = BoxedConfig::default();

    for path in paths {
        match load_config_file(path)? {
            Some(file_config) => {
                debug!(event = "core.config.file_loaded", path = %path.display());
                config = merge_configs(config, file_config);
            }
            None => debug!(event = "core.config.file_not_found", path = %path.display()),
        }
    }

    validate_config(&config)?;

    Ok(config)
}

/// `<dir>/.boxed/config.toml`
pub fn config_path_in(dir: &Path) -> PathBuf {
    dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// Load a single config file. Returns `Ok(None)` if it does not exist.
fn load_config_file(path: &Path) -> Result<Option<BoxedConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    toml::from_str(&content)
        .map(Some)
        .map_err(|e| ConfigError::ConfigParseError {
            message: format!("'{}': {}", path.display(), e),
        })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only if present.
pub fn merge_configs(base: BoxedConfig, override_config: BoxedConfig) -> BoxedConfig {
    BoxedConfig {
        window: WindowConfig {
            title: override_config.window.title.or(base.window.title),
            width: override_config.window.width.or(base.window.width),
            height: override_config.window.height.or(base.window.height),
            min_width: override_config.window.min_width.or(base.window.min_width),
            min_height: override_config.window.min_height.or(base.window.min_height),
        },
    }
}
