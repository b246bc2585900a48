use std::fmt;

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use tracing::debug;

/// Fire-and-forget command sender.
///
/// Thin wrapper over an unbounded `futures` channel so it works with any
/// executor (the gpui foreground executor in the shell, tokio in tests).
/// Sending never blocks. The receiving side owns all reaction to the command.
pub struct CommandSender<T> {
    tx: UnboundedSender<T>,
}

impl<T> Clone for CommandSender<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T: fmt::Display> CommandSender<T> {
    /// Create a connected sender/receiver pair.
    pub fn channel() -> (Self, UnboundedReceiver<T>) {
        let (tx, rx) = unbounded();
        (Self { tx }, rx)
    }

    /// Send a command without acknowledgment.
    ///
    /// A closed receiver is not an error for the sender: the command is
    /// discarded and noted at debug level.
    pub fn send(&self, command: T) {
        if let Err(e) = self.tx.unbounded_send(command) {
            debug!(
                event = "core.command.send_dropped",
                command = %e.into_inner(),
                reason = "receiver closed"
            );
        }
    }

    /// Send a command, handing it back if the receiver is gone.
    pub fn try_send(&self, command: T) -> Result<(), T> {
        self.tx.unbounded_send(command).map_err(|e| e.into_inner())
    }

    /// Whether the receiving side has been dropped.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}
