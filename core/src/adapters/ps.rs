//! Process table lookups using ps.

use crate::error::{Error, Result};
use crate::ports::ProcessTablePort;

use super::run_tool;

/// ps-backed process table.
///
/// Executes `ps -p PID -o comm=` for each lookup; the `comm=` format prints
/// the bare command name with no header.
pub struct PsProcessTable;

impl PsProcessTable {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PsProcessTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessTablePort for PsProcessTable {
    async fn command_name(&self, pid: u32) -> Result<String> {
        let output = run_tool("ps", &["-p", &pid.to_string(), "-o", "comm="]).await?;
        if !output.status.success() {
            return Err(Error::CommandFailed(format!(
                "ps lookup for pid {} failed",
                pid
            )));
        }

        let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if name.is_empty() {
            return Err(Error::ParseError(format!(
                "empty command name for pid {}",
                pid
            )));
        }
        Ok(name)
    }
}
