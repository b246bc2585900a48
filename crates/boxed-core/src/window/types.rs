use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::window::errors::WindowError;

/// A user-triggered request from the window decorations.
///
/// Intents are consumed immediately by dispatch. They are never queued or
/// persisted, but they carry stable snake_case names so they can be logged
/// and parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowIntent {
    /// Minimize the host window.
    Minimize,
    /// Maximize the host window, or restore it if already maximized.
    ToggleMaximize,
    /// Close the host window.
    Close,
    /// Open the settings surface. Does not need the window handle.
    OpenSettings,
}

impl WindowIntent {
    /// All intents in title-bar button order.
    pub const ALL: [WindowIntent; 4] = [
        WindowIntent::OpenSettings,
        WindowIntent::Minimize,
        WindowIntent::ToggleMaximize,
        WindowIntent::Close,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WindowIntent::Minimize => "minimize",
            WindowIntent::ToggleMaximize => "toggle_maximize",
            WindowIntent::Close => "close",
            WindowIntent::OpenSettings => "open_settings",
        }
    }

    /// Whether this intent can only be honored once the host window handle
    /// has been acquired.
    pub fn requires_handle(&self) -> bool {
        self.host_operation().is_some()
    }

    /// The host window operation this intent maps to, if any.
    pub fn host_operation(&self) -> Option<HostOperation> {
        match self {
            WindowIntent::Minimize => Some(HostOperation::Minimize),
            WindowIntent::ToggleMaximize => Some(HostOperation::ToggleMaximize),
            WindowIntent::Close => Some(HostOperation::Close),
            WindowIntent::OpenSettings => None,
        }
    }
}

impl fmt::Display for WindowIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindowIntent {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minimize" => Ok(WindowIntent::Minimize),
            "toggle_maximize" => Ok(WindowIntent::ToggleMaximize),
            "close" => Ok(WindowIntent::Close),
            "open_settings" => Ok(WindowIntent::OpenSettings),
            _ => Err(WindowError::UnknownIntent {
                name: s.to_string(),
            }),
        }
    }
}

/// Operations the host windowing facility exposes on a window handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostOperation {
    Minimize,
    ToggleMaximize,
    Close,
}

impl HostOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            HostOperation::Minimize => "minimize",
            HostOperation::ToggleMaximize => "toggle_maximize",
            HostOperation::Close => "close",
        }
    }
}

impl fmt::Display for HostOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the controller holds a host window handle.
///
/// Transitions only from `Absent` to `Acquired`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleState {
    Absent,
    Acquired,
}

impl fmt::Display for HandleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandleState::Absent => write!(f, "absent"),
            HandleState::Acquired => write!(f, "acquired"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BoxedError;

    #[test]
    fn test_intent_display_matches_command_names() {
        assert_eq!(WindowIntent::Minimize.to_string(), "minimize");
        assert_eq!(WindowIntent::ToggleMaximize.to_string(), "toggle_maximize");
        assert_eq!(WindowIntent::Close.to_string(), "close");
        assert_eq!(WindowIntent::OpenSettings.to_string(), "open_settings");
    }

    #[test]
    fn test_intent_parse_accepts_display_names() {
        for intent in WindowIntent::ALL {
            let parsed: WindowIntent = intent.to_string().parse().unwrap();
            assert_eq!(parsed, intent);
        }
    }

    #[test]
    fn test_intent_parse_is_case_insensitive_and_trims() {
        assert_eq!(
            " Toggle_Maximize ".parse::<WindowIntent>().unwrap(),
            WindowIntent::ToggleMaximize
        );
    }

    #[test]
    fn test_intent_parse_rejects_unknown_name() {
        let err = "maximize".parse::<WindowIntent>().unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_WINDOW_INTENT");
        assert!(err.is_user_error());
        assert_eq!(err.to_string(), "Unknown window intent 'maximize'");
    }

    #[test]
    fn test_intent_serde_uses_snake_case() {
        let json = serde_json::to_string(&WindowIntent::OpenSettings).unwrap();
        assert_eq!(json, "\"open_settings\"");
        let intent: WindowIntent = serde_json::from_str("\"toggle_maximize\"").unwrap();
        assert_eq!(intent, WindowIntent::ToggleMaximize);
    }

    #[test]
    fn test_only_open_settings_skips_the_handle() {
        assert!(WindowIntent::Minimize.requires_handle());
        assert!(WindowIntent::ToggleMaximize.requires_handle());
        assert!(WindowIntent::Close.requires_handle());
        assert!(!WindowIntent::OpenSettings.requires_handle());
    }

    #[test]
    fn test_host_operation_mapping() {
        assert_eq!(
            WindowIntent::Minimize.host_operation(),
            Some(HostOperation::Minimize)
        );
        assert_eq!(
            WindowIntent::ToggleMaximize.host_operation(),
            Some(HostOperation::ToggleMaximize)
        );
        assert_eq!(
            WindowIntent::Close.host_operation(),
            Some(HostOperation::Close)
        );
        assert_eq!(WindowIntent::OpenSettings.host_operation(), None);
    }

    #[test]
    fn test_button_order() {
        assert_eq!(
            WindowIntent::ALL,
            [
                WindowIntent::OpenSettings,
                WindowIntent::Minimize,
                WindowIntent::ToggleMaximize,
                WindowIntent::Close,
            ]
        );
    }
}
