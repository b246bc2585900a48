//! boxed-ui: desktop shell for Boxed
//!
//! Opens one window with a custom title bar in place of the system one. The
//! decoration buttons go through the core `WindowController`; the settings
//! button opens a separate settings window.

use boxed_core::events::{log_app_error, log_app_shutdown, log_app_startup};
use boxed_core::{BoxedConfig, CommandSender, SettingsCommand, init_logging};
use gpui::{App, AppContext, Application};

mod host;
mod main_window;
mod theme;
mod views;

use views::ShellView;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(false);

    let config = BoxedConfig::load_hierarchy().inspect_err(|e| log_app_error(e))?;
    let window_config = config.window;
    log_app_startup(&window_config);

    Application::new().run(move |cx: &mut App| {
        let (settings, commands) = CommandSender::<SettingsCommand>::channel();
        views::settings::spawn_settings_task(window_config.clone(), commands, cx);

        main_window::on_last_window_closed(cx, |cx| {
            log_app_shutdown();
            cx.quit();
        });

        let bounds = main_window::main_window_bounds(&window_config, cx);
        let options = main_window::main_window_options(&window_config, bounds);

        if let Err(e) = cx.open_window(options, |window, cx| {
            cx.new(|cx| ShellView::new(window_config, settings, window, cx))
        }) {
            tracing::error!(event = "ui.window.open_failed", error = %e);
            cx.quit();
        }
    });

    Ok(())
}
