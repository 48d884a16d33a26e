//! Window-class listing using wmctrl.
//!
//! `wmctrl -lx` prints one window per line:
//!
//! ```text
//! 0x03600003  0 navigator.Firefox     host Mozilla Firefox
//! 0x04a00004  1 code.Code             host main.rs - Visual Studio Code
//! ```
//!
//! The third whitespace-separated field is the `WM_CLASS` pair.

use tracing::debug;

use crate::error::{Error, Result};
use crate::ports::WindowClassPort;

use super::run_tool;

/// wmctrl-backed window class listing.
pub struct WmctrlWindows;

impl WmctrlWindows {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WmctrlWindows {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowClassPort for WmctrlWindows {
    async fn window_classes(&self) -> Result<Vec<String>> {
        let output = run_tool("wmctrl", &["-lx"]).await?;
        if !output.status.success() {
            return Err(Error::CommandFailed("wmctrl -lx failed".to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let classes = parse_class_listing(&stdout);
        debug!(count = classes.len(), "listed window classes");
        Ok(classes)
    }
}

/// Extract the class field from each listing line.
///
/// Expected columns: window id, desktop, class, host, title words.
/// Lines with fewer than four fields are skipped.
fn parse_class_listing(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 4 {
                return None;
            }
            Some(fields[2].to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_class_listing() {
        let output = "0x03600003  0 navigator.Firefox   host Mozilla Firefox\n\
                      0x04a00004  1 code.Code           host main.rs - Visual Studio Code\n";
        let classes = parse_class_listing(output);
        assert_eq!(classes, vec!["navigator.Firefox", "code.Code"]);
    }

    #[test]
    fn test_parse_skips_short_lines() {
        let output = "0x03600003  0 navigator.Firefox   host Mozilla Firefox\n\
                      malformed line\n\
                      \n";
        let classes = parse_class_listing(output);
        assert_eq!(classes, vec!["navigator.Firefox"]);
    }
}
