//! Unix signal dispatch by app name.
//!
//! Matching pids are listed with `pgrep -x NAME`; signals are then delivered
//! directly with `kill(2)`. The broad fallback shells out to `killall`,
//! which matches the full process name and sends SIGTERM by default.

use std::sync::OnceLock;

use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;
use regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};
use crate::ports::SignalPort;

use super::run_tool;

static NAME_PATTERN: OnceLock<Regex> = OnceLock::new();

/// App identifiers are fed to process-matching tools as patterns; anything
/// outside this charset is refused rather than escaped.
fn is_safe_name(name: &str) -> bool {
    let pattern = NAME_PATTERN
        .get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._+-]*$").expect("static pattern"));
    pattern.is_match(name)
}

/// Signal dispatcher for Unix desktops.
pub struct UnixSignals;

impl UnixSignals {
    pub fn new() -> Self {
        Self
    }

    /// List pids whose command name exactly matches `app`.
    ///
    /// pgrep exits 1 when nothing matches; that is an empty list, not an
    /// error.
    async fn matching_pids(&self, app: &str) -> Result<Vec<i32>> {
        let output = run_tool("pgrep", &["-x", app]).await?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_pids(&stdout))
    }

    /// Deliver `signal` to every process matching `app` exactly.
    async fn signal_exact(&self, app: &str, sig: Signal) -> Result<bool> {
        if !is_safe_name(app) {
            return Err(Error::ParseError(format!(
                "refusing to match unsafe app name {:?}",
                app
            )));
        }

        let pids = self.matching_pids(app).await?;
        if pids.is_empty() {
            return Ok(false);
        }

        let mut delivered = false;
        for pid in pids {
            match signal::kill(Pid::from_raw(pid), sig) {
                Ok(()) => delivered = true,
                // The process may have exited between pgrep and kill
                Err(errno) => debug!(pid, error = %errno, "signal not delivered"),
            }
        }
        Ok(delivered)
    }
}

impl Default for UnixSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalPort for UnixSignals {
    async fn term_exact(&self, app: &str) -> Result<bool> {
        self.signal_exact(app, Signal::SIGTERM).await
    }

    async fn kill_exact(&self, app: &str) -> Result<bool> {
        self.signal_exact(app, Signal::SIGKILL).await
    }

    async fn kill_by_name(&self, name: &str) -> Result<bool> {
        if !is_safe_name(name) {
            return Err(Error::ParseError(format!(
                "refusing to match unsafe app name {:?}",
                name
            )));
        }

        let output = run_tool("killall", &[name]).await?;
        // killall exits 1 when no process matched
        Ok(output.status.success())
    }

    async fn is_alive(&self, app: &str) -> bool {
        match self.matching_pids(app).await {
            Ok(pids) => !pids.is_empty(),
            Err(e) => {
                debug!(app, error = %e, "liveness check failed");
                false
            }
        }
    }
}

/// Parse pgrep output, one pid per line.
fn parse_pids(stdout: &str) -> Vec<i32> {
    stdout
        .lines()
        .filter_map(|line| line.trim().parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pids() {
        assert_eq!(parse_pids("100\n204\n\n"), vec![100, 204]);
        assert_eq!(parse_pids(""), Vec::<i32>::new());
        assert_eq!(parse_pids("garbage\n42\n"), vec![42]);
    }

    #[test]
    fn test_safe_names() {
        assert!(is_safe_name("firefox"));
        assert!(is_safe_name("gnome-terminal"));
        assert!(is_safe_name("java_vm.bin"));
        assert!(is_safe_name("7zip"));
    }

    #[test]
    fn test_unsafe_names_refused() {
        assert!(!is_safe_name(""));
        assert!(!is_safe_name("app name"));
        assert!(!is_safe_name("rm -rf /"));
        assert!(!is_safe_name("a|b"));
        assert!(!is_safe_name("-flag"));
    }
}
