//! gpui binding of the host windowing facility.
//!
//! gpui only lets window state change through `&mut Window`, which is not
//! available to the controller. The handle therefore forwards each operation
//! over a channel to a task bound to the shell window; that task applies it
//! with the live `Window` on the next tick of the foreground executor.

use boxed_core::window::HostOperation;
use boxed_core::{CommandSender, HostWindow, WindowError, WindowHost};
use futures::channel::mpsc::UnboundedReceiver;
use gpui::Window;

/// Hands out the shell window handle.
pub struct GpuiHost {
    operations: CommandSender<HostOperation>,
}

impl GpuiHost {
    /// Create a host and the receiving end the window task must drain.
    pub fn new() -> (Self, UnboundedReceiver<HostOperation>) {
        let (operations, receiver) = CommandSender::channel();
        (Self { operations }, receiver)
    }
}

impl WindowHost for GpuiHost {
    type Window = GpuiWindow;

    async fn acquire_window(&self) -> Result<GpuiWindow, WindowError> {
        if self.operations.is_closed() {
            return Err(WindowError::HandleUnavailable);
        }
        Ok(GpuiWindow {
            operations: self.operations.clone(),
        })
    }
}

/// Handle to the shell window.
pub struct GpuiWindow {
    operations: CommandSender<HostOperation>,
}

impl GpuiWindow {
    fn request(&self, operation: HostOperation) -> Result<(), WindowError> {
        self.operations
            .try_send(operation)
            .map_err(|operation| WindowError::HostOperationFailed {
                operation,
                message: "window task is no longer running".to_string(),
            })
    }
}

impl HostWindow for GpuiWindow {
    fn minimize(&self) -> Result<(), WindowError> {
        self.request(HostOperation::Minimize)
    }

    fn toggle_maximize(&self) -> Result<(), WindowError> {
        self.request(HostOperation::ToggleMaximize)
    }

    fn close(&self) -> Result<(), WindowError> {
        self.request(HostOperation::Close)
    }
}

/// Apply a host operation to the live gpui window.
pub fn apply_host_operation(operation: HostOperation, window: &mut Window) {
    tracing::debug!(event = "ui.host.operation_applied", operation = %operation);
    match operation {
        HostOperation::Minimize => window.minimize_window(),
        // zoom toggles between maximized and restored
        HostOperation::ToggleMaximize => window.zoom_window(),
        HostOperation::Close => window.remove_window(),
    }
}
