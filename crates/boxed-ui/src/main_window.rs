//! Main window setup: window options and the app lifecycle hook.
//!
//! The custom title bar replaces the system one, but the window keeps its
//! native resize, minimize and zoom behaviour. On macOS that needs a real
//! titlebar made transparent (the system style mask drops resizing and
//! miniaturizing without one). On Linux the window asks for client
//! decorations and the shell view draws its own resize frame.

use boxed_core::config::WindowConfig;
use gpui::{
    App, Bounds, Pixels, Point, TitlebarOptions, WindowBounds, WindowDecorations, WindowOptions,
    px, size,
};

use crate::theme;

/// Where the macOS traffic lights sit inside the custom title bar.
fn traffic_light_position() -> Point<Pixels> {
    Point {
        x: px(theme::TRAFFIC_LIGHT_X),
        y: px((theme::TITLE_BAR_HEIGHT - theme::TRAFFIC_LIGHT_SIZE) / 2.0),
    }
}

/// Options for the main shell window, sized and titled from config.
pub fn main_window_options(config: &WindowConfig, bounds: Bounds<Pixels>) -> WindowOptions {
    WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some(config.title().to_string().into()),
            appears_transparent: true,
            traffic_light_position: Some(traffic_light_position()),
        }),
        is_resizable: true,
        is_minimizable: true,
        window_decorations: Some(WindowDecorations::Client),
        window_min_size: Some(size(
            px(config.min_width() as f32),
            px(config.min_height() as f32),
        )),
        ..Default::default()
    }
}

/// Centered bounds for the configured initial size.
pub fn main_window_bounds(config: &WindowConfig, cx: &App) -> Bounds<Pixels> {
    Bounds::centered(
        None,
        size(px(config.width() as f32), px(config.height() as f32)),
        cx,
    )
}

/// Run `on_last` every time a window closes and no window is left.
pub fn on_last_window_closed(cx: &mut App, mut on_last: impl FnMut(&mut App) + 'static) {
    cx.on_window_closed(move |cx| {
        if cx.windows().is_empty() {
            on_last(cx);
        }
    })
    .detach();
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use gpui::{TestAppContext, point};

    use super::*;
    use crate::views::settings::SettingsView;

    fn bounds() -> Bounds<Pixels> {
        Bounds::new(point(px(0.), px(0.)), size(px(1280.), px(800.)))
    }

    #[test]
    fn test_main_window_keeps_native_resize_and_minimize() {
        let options = main_window_options(&WindowConfig::default(), bounds());

        assert!(options.is_resizable);
        assert!(options.is_minimizable);
        assert!(options.is_movable);

        // A missing titlebar would strip resizing on macOS.
        let titlebar = options.titlebar.unwrap();
        assert!(titlebar.appears_transparent);
        assert_eq!(titlebar.title, Some("Boxed".into()));
        assert_eq!(
            titlebar.traffic_light_position,
            Some(point(px(12.), px(10.)))
        );
        assert!(matches!(
            options.window_decorations,
            Some(WindowDecorations::Client)
        ));
    }

    #[test]
    fn test_main_window_uses_configured_geometry() {
        let config = WindowConfig {
            title: Some("Ledger".to_string()),
            min_width: Some(800),
            min_height: Some(500),
            ..Default::default()
        };
        let options = main_window_options(&config, bounds());

        assert_eq!(options.window_min_size, Some(size(px(800.), px(500.))));
        assert_eq!(options.titlebar.unwrap().title, Some("Ledger".into()));
        assert_eq!(
            options.window_bounds,
            Some(WindowBounds::Windowed(bounds()))
        );
    }

    #[gpui::test]
    fn test_main_window_bounds_are_centered_with_configured_size(cx: &mut TestAppContext) {
        let config = WindowConfig {
            width: Some(900),
            height: Some(600),
            ..Default::default()
        };
        let b = cx.update(|cx| main_window_bounds(&config, cx));
        assert_eq!(b.size, size(px(900.), px(600.)));
    }

    #[gpui::test]
    fn test_last_window_closed_fires_only_when_none_remain(cx: &mut TestAppContext) {
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        cx.update(|cx| on_last_window_closed(cx, move |_| counter.set(counter.get() + 1)));

        let first = cx.add_window(|_, _| SettingsView::new(WindowConfig::default()));
        let second = cx.add_window(|_, _| SettingsView::new(WindowConfig::default()));

        first
            .update(cx, |_, window, _| window.remove_window())
            .unwrap();
        cx.run_until_parked();
        assert_eq!(fired.get(), 0);
        assert_eq!(cx.windows().len(), 1);

        second
            .update(cx, |_, window, _| window.remove_window())
            .unwrap();
        cx.run_until_parked();
        assert_eq!(fired.get(), 1);
        assert!(cx.windows().is_empty());
    }
}
