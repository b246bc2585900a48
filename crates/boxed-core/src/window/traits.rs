use std::future::Future;

use crate::window::errors::WindowError;

/// The host windowing facility.
///
/// Hands out the window handle asynchronously. The returned future may never
/// resolve (e.g. when the UI is previewed outside its native shell); callers
/// must treat that as a normal, permanent state rather than a timeout.
pub trait WindowHost {
    type Window: HostWindow;

    fn acquire_window(&self) -> impl Future<Output = Result<Self::Window, WindowError>>;
}

/// Operations on an acquired host window handle.
///
/// Implementations apply the change synchronously from the caller's point of
/// view and report host-side failures through the result.
pub trait HostWindow {
    fn minimize(&self) -> Result<(), WindowError>;
    fn toggle_maximize(&self) -> Result<(), WindowError>;
    fn close(&self) -> Result<(), WindowError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_host_window_is_implementable() {
        struct CountingWindow {
            calls: Cell<u32>,
        }
        impl HostWindow for CountingWindow {
            fn minimize(&self) -> Result<(), WindowError> {
                self.calls.set(self.calls.get() + 1);
                Ok(())
            }
            fn toggle_maximize(&self) -> Result<(), WindowError> {
                Err(WindowError::HandleUnavailable)
            }
            fn close(&self) -> Result<(), WindowError> {
                Ok(())
            }
        }

        let window = CountingWindow {
            calls: Cell::new(0),
        };
        assert!(window.minimize().is_ok());
        assert!(window.toggle_maximize().is_err());
        assert_eq!(window.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_window_host_resolves_handle() {
        struct ReadyHost;
        struct NoopWindow;
        impl HostWindow for NoopWindow {
            fn minimize(&self) -> Result<(), WindowError> {
                Ok(())
            }
            fn toggle_maximize(&self) -> Result<(), WindowError> {
                Ok(())
            }
            fn close(&self) -> Result<(), WindowError> {
                Ok(())
            }
        }
        impl WindowHost for ReadyHost {
            type Window = NoopWindow;
            async fn acquire_window(&self) -> Result<NoopWindow, WindowError> {
                Ok(NoopWindow)
            }
        }

        let window = ReadyHost.acquire_window().await;
        assert!(window.is_ok());
    }
}
