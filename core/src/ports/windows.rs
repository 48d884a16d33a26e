//! Window query ports (interfaces).

use crate::error::Result;

/// Port for enumerating visible windows and resolving their owners.
///
/// Windows are identified by an opaque platform id valid only for the
/// duration of one discovery pass.
pub trait WindowQueryPort: Send + Sync {
    /// List the ids of all currently visible windows.
    fn visible_windows(&self) -> impl std::future::Future<Output = Result<Vec<u64>>> + Send;

    /// Resolve the process id owning a window.
    ///
    /// Windows can disappear mid-enumeration; a failed lookup drops the
    /// window, it is not an error for the batch.
    fn window_pid(&self, window: u64) -> impl std::future::Future<Output = Result<u32>> + Send;
}

/// Port for listing windows by their window-manager class.
///
/// Used as the fallback discovery path when PID-based enumeration
/// yields nothing.
pub trait WindowClassPort: Send + Sync {
    /// List the raw `WM_CLASS` field (`instance.class`) of every window.
    fn window_classes(&self) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
}
