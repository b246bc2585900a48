//! Built-in fallback values for configuration fields.

pub const DEFAULT_TITLE: &str = "Boxed";

pub const DEFAULT_WIDTH: u32 = 1280;

pub const DEFAULT_HEIGHT: u32 = 800;

/// Smallest size at which the title bar buttons still fit beside the title.
pub const DEFAULT_MIN_WIDTH: u32 = 640;

pub const DEFAULT_MIN_HEIGHT: u32 = 400;

/// Name of the per-user and per-project config directory.
pub const CONFIG_DIR_NAME: &str = ".boxed";

pub const CONFIG_FILE_NAME: &str = "config.toml";
