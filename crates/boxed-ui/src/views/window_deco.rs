//! Custom window decorations for the main window.
//!
//! Renders the drag region with the centered title and the four title bar
//! buttons (settings, minimize, maximize/restore, close).

use boxed_core::WindowIntent;
use gpui::{Context, IntoElement, MouseButton, Rgba, div, prelude::*, px};

use crate::theme;
use crate::views::ShellView;

/// Glyph drawn on the button for an intent.
pub fn button_glyph(intent: WindowIntent) -> &'static str {
    match intent {
        WindowIntent::OpenSettings => "⚙",
        WindowIntent::Minimize => "—",
        WindowIntent::ToggleMaximize => "❐",
        WindowIntent::Close => "✕",
    }
}

fn button_hover(intent: WindowIntent) -> Rgba {
    match intent {
        WindowIntent::Close => theme::ember(),
        _ => theme::button_hover(),
    }
}

/// Render the title bar.
///
/// Mouse-down on the drag region starts a native window move, so the
/// window can still be repositioned without a system title bar.
pub fn render_title_bar(title: String, cx: &mut Context<ShellView>) -> impl IntoElement {
    div()
        .flex()
        .flex_row()
        .flex_none()
        .items_center()
        .w_full()
        .h(px(theme::TITLE_BAR_HEIGHT))
        .pl(px(theme::TITLE_BAR_LEADING_INSET))
        .bg(theme::title_bar())
        .border_b_1()
        .border_color(theme::border())
        .child(
            div()
                .id("window-deco-drag-region")
                .flex()
                .flex_1()
                .h_full()
                .items_center()
                .justify_center()
                .on_mouse_down(MouseButton::Left, |_, window, _| {
                    window.start_window_move()
                })
                .child(
                    div()
                        .text_size(px(theme::TEXT_SM))
                        .text_color(theme::text_subtle())
                        .child(title),
                ),
        )
        .child(
            div().flex().flex_row().h_full().children(
                WindowIntent::ALL
                    .into_iter()
                    .map(|intent| render_title_button(intent, cx)),
            ),
        )
}

fn render_title_button(
    intent: WindowIntent,
    cx: &mut Context<ShellView>,
) -> impl IntoElement + use<> {
    let hover = button_hover(intent);

    div()
        .id(intent.as_str())
        .flex()
        .items_center()
        .justify_center()
        .w(px(theme::TITLE_BUTTON_WIDTH))
        .h_full()
        .text_size(px(theme::TEXT_MD))
        .text_color(theme::text())
        .cursor_pointer()
        .hover(move |style| style.bg(hover))
        .child(button_glyph(intent))
        .on_click(cx.listener(move |view, _, _, _| view.on_intent(intent)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_intent_has_a_distinct_glyph() {
        let glyphs: Vec<&str> = WindowIntent::ALL.into_iter().map(button_glyph).collect();
        for (i, glyph) in glyphs.iter().enumerate() {
            assert!(!glyph.is_empty());
            assert!(!glyphs[i + 1..].contains(glyph));
        }
    }
}
