//! Discovery of window-enumeration tools on the host.

use std::path::PathBuf;

/// Candidate paths for xdotool.
const XDOTOOL_PATHS: &[&str] = &[
    "/usr/bin/xdotool",
    "/usr/local/bin/xdotool",
    "/bin/xdotool",
];

/// Candidate paths for wmctrl.
const WMCTRL_PATHS: &[&str] = &["/usr/bin/wmctrl", "/usr/local/bin/wmctrl", "/bin/wmctrl"];

/// Locates the window-enumeration tools this crate depends on.
///
/// Probed once at construction; the engine uses this to decide between a
/// live resolution pass and a remediation prompt.
pub struct ToolDiscovery {
    xdotool_path: Option<PathBuf>,
    wmctrl_path: Option<PathBuf>,
}

impl ToolDiscovery {
    /// Create a new discovery, searching the standard install paths.
    pub fn new() -> Self {
        Self {
            xdotool_path: find_executable(XDOTOOL_PATHS),
            wmctrl_path: find_executable(WMCTRL_PATHS),
        }
    }

    /// Create a discovery with explicit paths (for testing).
    pub fn with_paths(xdotool_path: Option<PathBuf>, wmctrl_path: Option<PathBuf>) -> Self {
        Self {
            xdotool_path,
            wmctrl_path,
        }
    }

    /// Returns the xdotool path if found.
    pub fn xdotool_path(&self) -> Option<&PathBuf> {
        self.xdotool_path.as_ref()
    }

    /// Returns the wmctrl path if found.
    pub fn wmctrl_path(&self) -> Option<&PathBuf> {
        self.wmctrl_path.as_ref()
    }

    /// Returns true if xdotool is available.
    pub fn is_xdotool_available(&self) -> bool {
        self.xdotool_path.is_some()
    }

    /// Returns true if wmctrl is available.
    pub fn is_wmctrl_available(&self) -> bool {
        self.wmctrl_path.is_some()
    }

    /// Returns true if at least one discovery tool is installed.
    pub fn any_available(&self) -> bool {
        self.xdotool_path.is_some() || self.wmctrl_path.is_some()
    }
}

impl Default for ToolDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the first existing executable among the candidate paths.
fn find_executable(paths: &[&str]) -> Option<PathBuf> {
    paths.iter().map(PathBuf::from).find(|path| path.is_file())
}
