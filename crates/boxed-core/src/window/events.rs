use serde::{Deserialize, Serialize};

/// What a successful dispatch did.
///
/// Each variant describes _what happened_. A dropped intent (no handle yet)
/// or an absorbed host failure produces no event at all, so callers can
/// react to changes without an error channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowEvent {
    /// The host minimized the window.
    Minimized,
    /// The host toggled between maximized and restored.
    MaximizeToggled,
    /// The host closed the window.
    Closed,
    /// The `open_settings` command was sent to the settings subsystem.
    /// Delivery is not acknowledged.
    SettingsRequested,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serde_roundtrip() {
        let event = WindowEvent::MaximizeToggled;
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: WindowEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
