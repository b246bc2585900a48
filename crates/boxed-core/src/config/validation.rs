use crate::config::types::BoxedConfig;
use crate::errors::ConfigError;

/// Validate a merged configuration.
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` if the title is blank, a
/// minimum dimension is zero, or the initial size is below the minimum.
pub fn validate_config(config: &BoxedConfig) -> Result<(), ConfigError> {
    let window = &config.window;

    if window.title().trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "window.title cannot be empty".to_string(),
        });
    }

    if window.min_width() == 0 || window.min_height() == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "window.min_width and window.min_height must be greater than 0".to_string(),
        });
    }

    if window.width() < window.min_width() {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "window.width ({}) is smaller than window.min_width ({})",
                window.width(),
                window.min_width()
            ),
        });
    }

    if window.height() < window.min_height() {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "window.height ({}) is smaller than window.min_height ({})",
                window.height(),
                window.min_height()
            ),
        });
    }

    Ok(())
}
