//! Window control: the bridge between decoration buttons and the host window.
//!
//! The UI produces [`WindowIntent`]s; the [`WindowController`] forwards them
//! to a [`HostWindow`] once one has been acquired from the [`WindowHost`].
//! Until then the handle-dependent intents are dropped without error.

pub mod controller;
pub mod dispatch;
pub mod errors;
pub mod events;
pub mod traits;
pub mod types;

pub use controller::WindowController;
pub use dispatch::IntentDispatcher;
pub use errors::WindowError;
pub use events::WindowEvent;
pub use traits::{HostWindow, WindowHost};
pub use types::{HandleState, HostOperation, WindowIntent};
