//! boxed-core: Core library for the Boxed desktop shell
//!
//! This library owns the contract between the window decorations drawn by
//! the UI and the host windowing facility. It is used by the gpui shell.
//!
//! # Main Entry Points
//!
//! - [`window`] - Window intents, host traits and the [`WindowController`]
//! - [`settings`] - The fire-and-forget settings command
//! - [`config`] - Configuration management
//! - [`logging`] - Tracing subscriber setup

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod settings;
pub mod window;

// Re-export commonly used types at crate root for convenience
pub use config::BoxedConfig;
pub use errors::{BoxedError, ConfigError};
pub use settings::{CommandSender, SettingsChannel, SettingsCommand};
pub use window::{
    HandleState, HostWindow, IntentDispatcher, WindowController, WindowError, WindowEvent,
    WindowHost, WindowIntent,
};

// Re-export logging initialization
pub use logging::init_logging;
