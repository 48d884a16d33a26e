//! Exclusion set for desktop-essential processes.

use std::collections::HashSet;

use super::app::normalize;

/// Process names that must never be offered for termination.
///
/// Killing any of these takes the desktop session (or this tool's own host)
/// down with it. The set is extensible via [`ExclusionSet::with_protected`].
pub const PROTECTED_APPS: &[&str] = &[
    // Launcher hosts
    "ulauncher",
    "albert",
    // Desktop shells and compositors
    "gnome-shell",
    "plasmashell",
    "mutter",
    "kwin_x11",
    "kwin_wayland",
    "xfwm4",
    "xfdesktop",
    // Panels and docks
    "xfce4-panel",
    "polybar",
    "waybar",
    "plank",
    // File managers
    "nautilus",
    "dolphin",
    "thunar",
    "pcmanfm",
    // Terminal emulators
    "gnome-terminal",
    "gnome-terminal-server",
    "konsole",
    "xfce4-terminal",
    "x-terminal-emulator",
    "xterm",
    "alacritty",
    "kitty",
    // Session infrastructure and kernel worker threads
    "systemd",
    "init",
    "dbus-daemon",
    "xorg",
    "xwayland",
    "kthreadd",
    "kworker",
];

/// The set of app identifiers protected from termination.
///
/// Always the union of the built-in [`PROTECTED_APPS`] list and a
/// user-supplied comma-separated list. Matching is case-insensitive.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl ExclusionSet {
    /// Build the exclusion set from a user-supplied comma-separated list.
    ///
    /// Entries are trimmed and lower-cased; empty entries are ignored.
    /// The built-in protected list is always included.
    pub fn from_user_list(list: &str) -> Self {
        let mut names: HashSet<String> =
            PROTECTED_APPS.iter().map(|name| name.to_string()).collect();
        names.extend(list.split(',').filter_map(normalize));
        Self { names }
    }

    /// Extend the protected set with additional names.
    ///
    /// For embedders whose host process or desktop stack is not covered by
    /// the built-in list.
    pub fn with_protected<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.names
            .extend(extra.into_iter().filter_map(|name| normalize(name.as_ref())));
        self
    }

    /// Check whether an app identifier is excluded.
    pub fn contains(&self, app: &str) -> bool {
        self.names.contains(&app.to_lowercase())
    }

    /// Number of excluded names (built-in plus user-supplied).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if the set is empty (never the case in practice).
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::from_user_list("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_always_present() {
        let set = ExclusionSet::default();
        assert!(set.contains("gnome-shell"));
        assert!(set.contains("ulauncher"));
        assert!(set.contains("x-terminal-emulator"));
    }

    #[test]
    fn test_user_list_parsing() {
        let set = ExclusionSet::from_user_list(" Spotify,  discord ,, ");
        assert!(set.contains("spotify"));
        assert!(set.contains("discord"));
        // Built-ins survive the merge
        assert!(set.contains("gnome-terminal"));
    }

    #[test]
    fn test_case_insensitive_matching() {
        let set = ExclusionSet::from_user_list("Spotify");
        assert!(set.contains("SPOTIFY"));
        assert!(set.contains("spotify"));
        assert!(!set.contains("slack"));
    }

    #[test]
    fn test_with_protected() {
        let set = ExclusionSet::default().with_protected(["My-Launcher"]);
        assert!(set.contains("my-launcher"));
    }
}
