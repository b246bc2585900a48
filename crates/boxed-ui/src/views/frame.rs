//! Resize frame for client-side decorations.
//!
//! When the platform leaves decorations to the app (Wayland, X11), nothing
//! draws resize borders. The frame pads the shell by [`theme::RESIZE_INSET`],
//! shows resize cursors over that band, and starts a native resize on
//! mouse-down. With server decorations, or while tiled, the content is
//! returned as is.

use gpui::{
    AnyElement, Bounds, CursorStyle, Decorations, HitboxBehavior, IntoElement, MouseButton,
    Pixels, Point, ResizeEdge, Size, Window, canvas, div, point, prelude::*, px,
};

use crate::theme;

/// Edge or corner under `pos`, if it lies within `inset` of the window border.
pub fn resize_edge(pos: Point<Pixels>, inset: Pixels, size: Size<Pixels>) -> Option<ResizeEdge> {
    let top = pos.y < inset;
    let bottom = pos.y > size.height - inset;
    let left = pos.x < inset;
    let right = pos.x > size.width - inset;

    let edge = match (top, bottom, left, right) {
        (true, _, true, _) => ResizeEdge::TopLeft,
        (true, _, _, true) => ResizeEdge::TopRight,
        (true, _, _, _) => ResizeEdge::Top,
        (_, true, true, _) => ResizeEdge::BottomLeft,
        (_, true, _, true) => ResizeEdge::BottomRight,
        (_, true, _, _) => ResizeEdge::Bottom,
        (_, _, true, _) => ResizeEdge::Left,
        (_, _, _, true) => ResizeEdge::Right,
        _ => return None,
    };
    Some(edge)
}

pub fn resize_cursor(edge: ResizeEdge) -> CursorStyle {
    match edge {
        ResizeEdge::Top | ResizeEdge::Bottom => CursorStyle::ResizeUpDown,
        ResizeEdge::Left | ResizeEdge::Right => CursorStyle::ResizeLeftRight,
        ResizeEdge::TopLeft | ResizeEdge::BottomRight => CursorStyle::ResizeUpLeftDownRight,
        ResizeEdge::TopRight | ResizeEdge::BottomLeft => CursorStyle::ResizeUpRightDownLeft,
    }
}

/// Wrap the shell content in a resize frame when decorations are client-side.
pub fn render_resize_frame(content: impl IntoElement, window: &mut Window) -> AnyElement {
    let inset = px(theme::RESIZE_INSET);

    match window.window_decorations() {
        Decorations::Client { tiling } if !tiling.is_tiled() => {
            window.set_client_inset(inset);

            div()
                .size_full()
                .p(inset)
                .bg(theme::border())
                .child(
                    canvas(
                        |_bounds, window, _cx| {
                            window.insert_hitbox(
                                Bounds::new(
                                    point(px(0.0), px(0.0)),
                                    window.window_bounds().get_bounds().size,
                                ),
                                HitboxBehavior::Normal,
                            )
                        },
                        move |_bounds, hitbox, window, _cx| {
                            let size = window.window_bounds().get_bounds().size;
                            if let Some(edge) = resize_edge(window.mouse_position(), inset, size) {
                                window.set_cursor_style(resize_cursor(edge), &hitbox);
                            }
                        },
                    )
                    .size_full()
                    .absolute(),
                )
                .on_mouse_move(|_, window, _| window.refresh())
                .on_mouse_down(MouseButton::Left, move |e, window, _| {
                    let size = window.window_bounds().get_bounds().size;
                    if let Some(edge) = resize_edge(e.position, inset, size) {
                        window.start_window_resize(edge);
                    }
                })
                .child(content)
                .into_any_element()
        }
        _ => {
            window.set_client_inset(px(0.0));
            content.into_any_element()
        }
    }
}
