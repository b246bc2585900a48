use super::events::WindowEvent;
use super::types::WindowIntent;

/// Trait for dispatching window intents.
///
/// Decouples the decoration views from the concrete host types. Views hold a
/// `&dyn IntentDispatcher` (or an `Rc` of one) and never see the handle.
///
/// # Semantics
///
/// - **Non-blocking**: dispatch never suspends and never waits for the host.
/// - **Infallible**: no fault reaches the caller. Intents that cannot be
///   honored (no handle yet, host refused) are absorbed and yield `None`.
/// - **Events**: `Some(event)` describes what changed, for callers that want
///   to react without polling the host.
pub trait IntentDispatcher {
    fn dispatch(&self, intent: WindowIntent) -> Option<WindowEvent>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatcher_trait_is_object_safe() {
        struct SettingsOnly;
        impl IntentDispatcher for SettingsOnly {
            fn dispatch(&self, intent: WindowIntent) -> Option<WindowEvent> {
                match intent {
                    WindowIntent::OpenSettings => Some(WindowEvent::SettingsRequested),
                    _ => None,
                }
            }
        }

        let dispatcher: &dyn IntentDispatcher = &SettingsOnly;
        assert_eq!(
            dispatcher.dispatch(WindowIntent::OpenSettings),
            Some(WindowEvent::SettingsRequested)
        );
        assert_eq!(dispatcher.dispatch(WindowIntent::Close), None);
    }
}
