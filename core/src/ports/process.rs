//! Process table port (interface).

use crate::error::Result;

/// Port for looking up process information in the OS process table.
pub trait ProcessTablePort: Send + Sync {
    /// Look up the command name for a pid.
    ///
    /// Fails if the process has exited or the lookup is not permitted;
    /// callers drop the pid and continue.
    fn command_name(&self, pid: u32) -> impl std::future::Future<Output = Result<String>> + Send;
}
