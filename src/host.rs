//! An abstraction over the host application's lifecycle to enable testing.

/// Defines the one host facility the channel needs: asking the process to
/// exit. Fire-and-forget; no result is reported back.
pub trait HostHandle: Send + Sync {
    /// Requests host process termination.
    fn request_exit(&self);
}

/// The production implementation that terminates the current process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessHost;

impl HostHandle for ProcessHost {
    fn request_exit(&self) {
        tracing::info!("SystemNavigator.pop received, exiting application");
        std::process::exit(0);
    }
}
