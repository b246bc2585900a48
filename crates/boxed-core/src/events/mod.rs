use tracing::{error, info, warn};

use crate::config::WindowConfig;
use crate::errors::BoxedError;

pub fn log_app_startup(window: &WindowConfig) {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION"),
        title = window.title(),
        width = window.width(),
        height = window.height(),
        min_width = window.min_width(),
        min_height = window.min_height()
    );
}

pub fn log_app_shutdown() {
    info!(event = "core.app.shutdown_started");
}

/// Log an application error with its code.
///
/// User errors (bad config and the like) are logged at `warn`, everything
/// else at `error`.
pub fn log_app_error(error: &dyn BoxedError) {
    if error.is_user_error() {
        warn!(
            event = "core.app.error_occurred",
            error = %error,
            error_code = error.error_code(),
            user_error = true
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            error = %error,
            error_code = error.error_code(),
            user_error = false
        );
    }
}
