use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, warn};

use crate::settings::SettingsChannel;
use crate::window::dispatch::IntentDispatcher;
use crate::window::events::WindowEvent;
use crate::window::traits::{HostWindow, WindowHost};
use crate::window::types::{HandleState, HostOperation, WindowIntent};

/// Bridges decoration intents to the host window.
///
/// Holds the host window handle once it has been acquired. The handle is
/// written at most once and never cleared, so every dispatch only has to
/// re-check whether it is present. Intents that need the handle are dropped
/// while it is absent; `OpenSettings` goes to the settings channel in every
/// state.
pub struct WindowController<H: WindowHost, S: SettingsChannel> {
    host: H,
    settings: S,
    window: OnceLock<H::Window>,
    /// Set by the first `acquire_handle` call. Acquisition is attempted once.
    acquisition_started: AtomicBool,
}

impl<H: WindowHost, S: SettingsChannel> WindowController<H, S> {
    pub fn new(host: H, settings: S) -> Self {
        Self {
            host,
            settings,
            window: OnceLock::new(),
            acquisition_started: AtomicBool::new(false),
        }
    }

    /// Ask the host for the window handle.
    ///
    /// Only the first call contacts the host; later or concurrent calls
    /// return the current state immediately. If the host fails or never
    /// answers, the handle stays absent for the controller's lifetime. That
    /// is the expected state outside the native shell, not an error.
    pub async fn acquire_handle(&self) -> HandleState {
        if self.acquisition_started.swap(true, Ordering::AcqRel) {
            return self.handle_state();
        }

        debug!(event = "core.window.acquire_started");

        // An unavailable handle is absorbed here and never logged.
        if let Ok(window) = self.host.acquire_window().await
            && self.window.set(window).is_ok()
        {
            info!(event = "core.window.acquire_completed");
        }

        self.handle_state()
    }

    pub fn handle_state(&self) -> HandleState {
        if self.window.get().is_some() {
            HandleState::Acquired
        } else {
            HandleState::Absent
        }
    }

    pub fn is_acquired(&self) -> bool {
        self.handle_state() == HandleState::Acquired
    }

    /// Forward an intent to the host window or the settings channel.
    ///
    /// Never blocks and never surfaces a fault. Returns the resulting event,
    /// or `None` when the intent was dropped (no handle) or the host refused
    /// the operation.
    pub fn dispatch(&self, intent: WindowIntent) -> Option<WindowEvent> {
        let Some(operation) = intent.host_operation() else {
            self.settings.open_settings();
            debug!(event = "core.window.settings_requested");
            return Some(WindowEvent::SettingsRequested);
        };

        let window = self.window.get()?;

        debug!(event = "core.window.dispatch_started", intent = %intent);

        let result = match operation {
            HostOperation::Minimize => window.minimize(),
            HostOperation::ToggleMaximize => window.toggle_maximize(),
            HostOperation::Close => window.close(),
        };

        match result {
            Ok(()) => {
                debug!(event = "core.window.dispatch_completed", intent = %intent);
                Some(match operation {
                    HostOperation::Minimize => WindowEvent::Minimized,
                    HostOperation::ToggleMaximize => WindowEvent::MaximizeToggled,
                    HostOperation::Close => WindowEvent::Closed,
                })
            }
            Err(e) => {
                warn!(
                    event = "core.window.dispatch_failed",
                    intent = %intent,
                    error = %e
                );
                None
            }
        }
    }
}

impl<H: WindowHost, S: SettingsChannel> IntentDispatcher for WindowController<H, S> {
    fn dispatch(&self, intent: WindowIntent) -> Option<WindowEvent> {
        WindowController::dispatch(self, intent)
    }
}
