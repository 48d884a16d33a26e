//! Signal dispatch port (interface).

use crate::error::Result;

/// Port for delivering termination signals to processes by app name.
///
/// Every method is best-effort; `Ok(false)` means no matching process was
/// found, which callers treat as a prompt to try a broader matching form.
pub trait SignalPort: Send + Sync {
    /// Request graceful termination of processes whose command name exactly
    /// matches `app`. Returns `Ok(true)` if at least one signal was delivered.
    fn term_exact(&self, app: &str) -> impl std::future::Future<Output = Result<bool>> + Send;

    /// Forcefully kill the same matching set with a non-ignorable signal.
    fn kill_exact(&self, app: &str) -> impl std::future::Future<Output = Result<bool>> + Send;

    /// Broad same-name kill fallback for apps whose process name does not
    /// match the identifier exactly.
    fn kill_by_name(&self, name: &str) -> impl std::future::Future<Output = Result<bool>> + Send;

    /// Check whether any process with this exact command name is still alive.
    fn is_alive(&self, app: &str) -> impl std::future::Future<Output = bool> + Send;
}
