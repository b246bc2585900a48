//! Root view of the main window.
//!
//! Composes the custom title bar and the workspace area, and owns the
//! window-bound task that acquires the host handle and applies host
//! operations to the live window.

use std::rc::Rc;

use boxed_core::config::WindowConfig;
use boxed_core::{CommandSender, IntentDispatcher, SettingsCommand, WindowController, WindowIntent};
use futures::StreamExt;
use gpui::{AsyncWindowContext, Context, IntoElement, Render, Task, Window, div, prelude::*};
use tracing::debug;

use crate::host::{GpuiHost, apply_host_operation};
use crate::theme;
use crate::views::{frame, window_deco};

type ShellController = WindowController<GpuiHost, CommandSender<SettingsCommand>>;

pub struct ShellView {
    config: WindowConfig,
    dispatcher: Rc<dyn IntentDispatcher>,
    /// Acquires the handle, then pumps host operations. Must be stored to prevent cancellation.
    _host_task: Task<()>,
}

impl ShellView {
    pub fn new(
        config: WindowConfig,
        settings: CommandSender<SettingsCommand>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let (host, mut operations) = GpuiHost::new();
        let controller: Rc<ShellController> = Rc::new(WindowController::new(host, settings));
        let acquiring = controller.clone();

        // Runs once the window context is live, which is when the host is ready.
        let host_task = cx.spawn_in(window, async move |this, cx: &mut AsyncWindowContext| {
            let state = acquiring.acquire_handle().await;
            debug!(event = "ui.shell.handle_resolved", state = %state);

            while let Some(operation) = operations.next().await {
                if let Err(e) =
                    this.update_in(cx, |_, window, _| apply_host_operation(operation, window))
                {
                    debug!(
                        event = "ui.shell.host_task_stopped",
                        reason = "view_dropped",
                        error = ?e
                    );
                    break;
                }
            }
        });

        Self {
            config,
            dispatcher: controller,
            _host_task: host_task,
        }
    }

    pub fn title(&self) -> &str {
        self.config.title()
    }

    /// Called by the title bar buttons.
    pub fn on_intent(&mut self, intent: WindowIntent) {
        if let Some(event) = self.dispatcher.dispatch(intent) {
            debug!(
                event = "ui.window_deco.intent_dispatched",
                intent = %intent,
                outcome = ?event
            );
        }
    }
}

impl Render for ShellView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let title = self.title().to_string();

        let content = div()
            .size_full()
            .flex()
            .flex_col()
            .bg(theme::workspace())
            .child(window_deco::render_title_bar(title, cx))
            // Workspace area below the title bar.
            .child(div().flex_1().w_full());

        frame::render_resize_frame(content, window)
    }
}
