//! Visible-window enumeration using xdotool.
//!
//! Uses the following commands:
//! - `xdotool search --onlyvisible --name ""` to list visible window ids
//! - `xdotool getwindowpid WINDOW` to resolve the owning pid

use tracing::debug;

use crate::error::{Error, Result};
use crate::ports::WindowQueryPort;

use super::run_tool;

/// xdotool-backed window query.
pub struct XdotoolWindows;

impl XdotoolWindows {
    pub fn new() -> Self {
        Self
    }
}

impl Default for XdotoolWindows {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowQueryPort for XdotoolWindows {
    /// List visible window ids, one per output line.
    ///
    /// xdotool exits non-zero when nothing matches; an empty id list is a
    /// legitimate result either way, so only the stdout lines are consulted.
    async fn visible_windows(&self) -> Result<Vec<u64>> {
        let output = run_tool("xdotool", &["search", "--onlyvisible", "--name", ""]).await?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        let windows = parse_window_ids(&stdout);
        debug!(count = windows.len(), "enumerated visible windows");
        Ok(windows)
    }

    async fn window_pid(&self, window: u64) -> Result<u32> {
        let output = run_tool("xdotool", &["getwindowpid", &window.to_string()]).await?;
        if !output.status.success() {
            return Err(Error::CommandFailed(format!(
                "xdotool getwindowpid {} failed",
                window
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        stdout
            .trim()
            .parse()
            .map_err(|_| Error::ParseError(format!("invalid pid for window {}", window)))
    }
}

/// Parse window ids from search output, skipping anything non-numeric.
fn parse_window_ids(stdout: &str) -> Vec<u64> {
    stdout
        .lines()
        .filter_map(|line| line.trim().parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_window_ids() {
        let ids = parse_window_ids("14680069\n14680070\n\n58720282\n");
        assert_eq!(ids, vec![14680069, 14680070, 58720282]);
    }

    #[test]
    fn test_parse_skips_garbage() {
        let ids = parse_window_ids("14680069\nDefaulting to --name\nnot-a-number\n");
        assert_eq!(ids, vec![14680069]);
    }
}
