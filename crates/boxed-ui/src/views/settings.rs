//! Settings subsystem of the shell.
//!
//! Receives `open_settings` commands from the window controller and shows a
//! settings window with the effective window configuration. A second command
//! while the window is open brings it to the front instead of opening another.

use boxed_core::SettingsCommand;
use boxed_core::config::WindowConfig;
use futures::StreamExt;
use futures::channel::mpsc::UnboundedReceiver;
use gpui::{
    App, AppContext, AsyncApp, Bounds, Context, IntoElement, Render, SharedString,
    TitlebarOptions, Window, WindowBounds, WindowHandle, WindowOptions, div, prelude::*, px, size,
};
use tracing::{debug, info, warn};

use crate::theme;

/// Start the app-level task that serves settings commands.
pub fn spawn_settings_task(
    config: WindowConfig,
    mut commands: UnboundedReceiver<SettingsCommand>,
    cx: &mut App,
) {
    cx.spawn(async move |cx: &mut AsyncApp| {
        let mut settings_window: Option<WindowHandle<SettingsView>> = None;

        while let Some(command) = commands.next().await {
            debug!(event = "ui.settings.command_received", command = %command);
            match command {
                SettingsCommand::OpenSettings => {
                    if cx
                        .update(|cx| show_settings_window(&config, &mut settings_window, cx))
                        .is_err()
                    {
                        debug!(event = "ui.settings.task_stopped", reason = "app_dropped");
                        break;
                    }
                }
            }
        }
    })
    .detach();
}

fn show_settings_window(
    config: &WindowConfig,
    existing: &mut Option<WindowHandle<SettingsView>>,
    cx: &mut App,
) {
    if let Some(handle) = existing
        && handle
            .update(cx, |_, window, _| window.activate_window())
            .is_ok()
    {
        debug!(event = "ui.settings.window_activated");
        return;
    }

    let bounds = Bounds::centered(None, size(px(420.0), px(260.0)), cx);
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some(SharedString::from("Settings")),
            ..Default::default()
        }),
        ..Default::default()
    };
    let view = SettingsView::new(config.clone());

    match cx.open_window(options, |_, cx| cx.new(|_| view)) {
        Ok(handle) => {
            info!(event = "ui.settings.window_opened");
            *existing = Some(handle);
        }
        Err(e) => warn!(event = "ui.settings.window_open_failed", error = %e),
    }
}

pub struct SettingsView {
    config: WindowConfig,
}

impl SettingsView {
    pub fn new(config: WindowConfig) -> Self {
        Self { config }
    }

    /// Label/value pairs shown in the window section.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let window = &self.config;
        vec![
            ("Title", window.title().to_string()),
            ("Size", format!("{} × {}", window.width(), window.height())),
            (
                "Minimum size",
                format!("{} × {}", window.min_width(), window.min_height()),
            ),
        ]
    }
}

impl Render for SettingsView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .gap(px(theme::SPACE_2))
            .p(px(theme::SPACE_4))
            .bg(theme::panel())
            .text_color(theme::text())
            .child(div().text_size(px(theme::TEXT_MD)).child("Window"))
            .children(self.rows().into_iter().map(|(label, value)| {
                div()
                    .flex()
                    .flex_row()
                    .justify_between()
                    .text_size(px(theme::TEXT_SM))
                    .child(div().text_color(theme::text_subtle()).child(label))
                    .child(div().child(value))
            }))
            .child(
                div()
                    .text_size(px(theme::TEXT_SM))
                    .text_color(theme::text_subtle())
                    .child("Edit ~/.boxed/config.toml to change these values."),
            )
    }
}

#[cfg(test)]
mod tests {
    use boxed_core::{CommandSender, SettingsChannel};
    use gpui::TestAppContext;

    use super::*;

    fn settings_task(cx: &mut TestAppContext) -> CommandSender<SettingsCommand> {
        let (settings, commands) = CommandSender::<SettingsCommand>::channel();
        cx.update(|cx| spawn_settings_task(WindowConfig::default(), commands, cx));
        settings
    }

    #[gpui::test]
    fn test_open_settings_opens_one_window(cx: &mut TestAppContext) {
        let settings = settings_task(cx);
        assert!(cx.windows().is_empty());

        settings.open_settings();
        cx.run_until_parked();

        let windows = cx.windows();
        assert_eq!(windows.len(), 1);
        assert!(windows[0].downcast::<SettingsView>().is_some());
    }

    #[gpui::test]
    fn test_repeat_open_settings_reuses_the_open_window(cx: &mut TestAppContext) {
        let settings = settings_task(cx);

        settings.open_settings();
        cx.run_until_parked();
        let first = cx.windows();

        settings.open_settings();
        settings.open_settings();
        cx.run_until_parked();

        let windows = cx.windows();
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].window_id(), first[0].window_id());
    }

    #[gpui::test]
    fn test_open_settings_after_close_opens_a_new_window(cx: &mut TestAppContext) {
        let settings = settings_task(cx);

        settings.open_settings();
        cx.run_until_parked();
        let closed = cx.windows()[0];
        closed
            .update(cx, |_, window, _| window.remove_window())
            .unwrap();
        cx.run_until_parked();
        assert!(cx.windows().is_empty());

        settings.open_settings();
        cx.run_until_parked();

        let windows = cx.windows();
        assert_eq!(windows.len(), 1);
        assert_ne!(windows[0].window_id(), closed.window_id());
    }

    #[test]
    fn test_rows_show_defaults() {
        let view = SettingsView::new(WindowConfig::default());
        assert_eq!(
            view.rows(),
            vec![
                ("Title", "Boxed".to_string()),
                ("Size", "1280 × 800".to_string()),
                ("Minimum size", "640 × 400".to_string()),
            ]
        );
    }

    #[test]
    fn test_rows_reflect_overrides() {
        let view = SettingsView::new(WindowConfig {
            title: Some("Ledger".to_string()),
            width: Some(1600),
            ..Default::default()
        });
        let rows = view.rows();
        assert_eq!(rows[0].1, "Ledger");
        assert_eq!(rows[1].1, "1600 × 800");
    }
}
