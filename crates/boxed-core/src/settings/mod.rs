//! The settings subsystem seam.
//!
//! Settings are opened through a single named command, `open_settings`,
//! which takes no arguments and is never awaited. Delivery is one-way: the
//! sender neither observes nor reacts to the outcome.

pub mod channel;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use channel::CommandSender;

/// Commands understood by the settings subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsCommand {
    OpenSettings,
}

impl SettingsCommand {
    pub fn name(&self) -> &'static str {
        match self {
            SettingsCommand::OpenSettings => "open_settings",
        }
    }
}

impl fmt::Display for SettingsCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One-way channel to the settings subsystem.
pub trait SettingsChannel {
    /// Fire the `open_settings` command. Must not block and must not fail.
    fn open_settings(&self);
}

impl SettingsChannel for CommandSender<SettingsCommand> {
    fn open_settings(&self) {
        self.send(SettingsCommand::OpenSettings);
    }
}
