use crate::errors::BoxedError;
use crate::window::types::HostOperation;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    /// The host did not (yet, or ever) supply a window handle.
    #[error("Host window handle is unavailable")]
    HandleUnavailable,

    #[error("Host window operation '{operation}' failed: {message}")]
    HostOperationFailed {
        operation: HostOperation,
        message: String,
    },

    #[error("Unknown window intent '{name}'")]
    UnknownIntent { name: String },
}

impl BoxedError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::HandleUnavailable => "WINDOW_HANDLE_UNAVAILABLE",
            WindowError::HostOperationFailed { .. } => "WINDOW_HOST_OPERATION_FAILED",
            WindowError::UnknownIntent { .. } => "UNKNOWN_WINDOW_INTENT",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, WindowError::UnknownIntent { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_unavailable() {
        let error = WindowError::HandleUnavailable;
        assert_eq!(error.to_string(), "Host window handle is unavailable");
        assert_eq!(error.error_code(), "WINDOW_HANDLE_UNAVAILABLE");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_host_operation_failed() {
        let error = WindowError::HostOperationFailed {
            operation: HostOperation::ToggleMaximize,
            message: "window closed".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Host window operation 'toggle_maximize' failed: window closed"
        );
        assert_eq!(error.error_code(), "WINDOW_HOST_OPERATION_FAILED");
        assert!(!error.is_user_error());
    }
}
