//! Colors and sizes shared by the shell views.

use gpui::{Rgba, rgb};

pub const TITLE_BAR_HEIGHT: f32 = 32.0;
pub const TITLE_BUTTON_WIDTH: f32 = 46.0;

/// macOS traffic lights: left offset and diameter.
pub const TRAFFIC_LIGHT_X: f32 = 12.0;
pub const TRAFFIC_LIGHT_SIZE: f32 = 12.0;

/// Room kept free for the traffic lights at the left of the title bar.
#[cfg(target_os = "macos")]
pub const TITLE_BAR_LEADING_INSET: f32 = 72.0;
#[cfg(not(target_os = "macos"))]
pub const TITLE_BAR_LEADING_INSET: f32 = 0.0;

/// Width of the client-side resize frame.
pub const RESIZE_INSET: f32 = 6.0;

pub const SPACE_2: f32 = 8.0;
pub const SPACE_4: f32 = 16.0;

pub const TEXT_SM: f32 = 12.0;
pub const TEXT_MD: f32 = 14.0;

pub fn title_bar() -> Rgba {
    rgb(0x1e1e1e)
}

pub fn workspace() -> Rgba {
    rgb(0x252526)
}

pub fn panel() -> Rgba {
    rgb(0x2d2d2d)
}

pub fn border() -> Rgba {
    rgb(0x444444)
}

pub fn text() -> Rgba {
    rgb(0xffffff)
}

pub fn text_subtle() -> Rgba {
    rgb(0xaaaaaa)
}

pub fn button_hover() -> Rgba {
    rgb(0x3a3a3a)
}

/// Hover color of the close button.
pub fn ember() -> Rgba {
    rgb(0xc42b1c)
}
