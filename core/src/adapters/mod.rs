//! Adapters layer - External system implementations.
//!
//! This module contains implementations of the port traits defined in
//! `ports`. Each adapter shells out to one platform tool and parses its
//! output tolerantly: a line that does not fit the expected shape is
//! skipped, not an error.

mod discovery;
mod ps;
#[cfg(unix)]
mod signals;
mod wmctrl;
mod xdotool;

pub use discovery::ToolDiscovery;
pub use ps::PsProcessTable;
#[cfg(unix)]
pub use signals::UnixSignals;
pub use wmctrl::WmctrlWindows;
pub use xdotool::XdotoolWindows;

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;

use crate::error::{Error, Result};

/// Upper bound on any single external probe.
const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Run an external tool, capped at [`PROBE_TIMEOUT`].
///
/// A missing executable maps to [`Error::ToolUnavailable`] so callers can
/// fall back to another tool or surface remediation.
pub(crate) async fn run_tool(program: &str, args: &[&str]) -> Result<std::process::Output> {
    let result = timeout(
        PROBE_TIMEOUT,
        Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output(),
    )
    .await;

    match result {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(Error::ToolUnavailable(program.to_string()))
        }
        Ok(Err(e)) => Err(Error::Io(e)),
        Err(_) => Err(Error::CommandFailed(format!("{} timed out", program))),
    }
}
