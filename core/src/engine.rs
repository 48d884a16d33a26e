//! QuitAll Engine - Host-facing facade.
//!
//! Wires the real adapters into the resolver and terminator and exposes a
//! synchronous API for launcher hosts: one call per query event, one call
//! per item-selection event. All business logic lives here so the host
//! stays a thin rendering layer.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, warn};

use crate::adapters::{
    PsProcessTable, ToolDiscovery, UnixSignals, WmctrlWindows, XdotoolWindows,
};
use crate::application::{AppResolver, TerminationOutcome, Terminator};
use crate::config::ConfigStore;
use crate::domain::{self, ExclusionSet, ItemAction, ResultItem};
use crate::error::{Error, Result};

/// The main QuitAll engine.
///
/// Owns its own current-thread runtime so hosts without an async context
/// can drive it with plain blocking calls.
pub struct QuitAllEngine {
    resolver: AppResolver<XdotoolWindows, WmctrlWindows, PsProcessTable>,
    terminator: Terminator<UnixSignals>,
    config: ConfigStore,
    discovery: ToolDiscovery,
    runtime: Runtime,

    // Cached state
    items: RwLock<Vec<ResultItem>>,
    exclusions: RwLock<ExclusionSet>,
}

impl QuitAllEngine {
    /// Create a new engine instance.
    pub fn new() -> Result<Self> {
        // Use single-threaded runtime - lighter on resources for a launcher extension
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::Config(format!("Failed to create runtime: {}", e)))?;
        let config = ConfigStore::new()?;

        let excluded_apps = runtime.block_on(config.get_excluded_apps())?;

        Ok(Self {
            resolver: AppResolver::new(
                XdotoolWindows::new(),
                WmctrlWindows::new(),
                PsProcessTable::new(),
            ),
            terminator: Terminator::new(UnixSignals::new()),
            config,
            discovery: ToolDiscovery::new(),
            runtime,
            items: RwLock::new(Vec::new()),
            exclusions: RwLock::new(ExclusionSet::from_user_list(&excluded_apps)),
        })
    }

    // =========================================================================
    // Query events
    // =========================================================================

    /// Handle a query event: resolve open apps and build the result items.
    ///
    /// Always returns at least one item: the quit offer, an informational
    /// "nothing open" row, or a remediation prompt when no discovery tool
    /// is installed.
    pub fn query(&self) -> Vec<ResultItem> {
        let items = self.build_items();
        *self.items.write() = items.clone();
        items
    }

    /// Get the items from the last query without re-resolving.
    pub fn cached_items(&self) -> Vec<ResultItem> {
        self.items.read().clone()
    }

    fn build_items(&self) -> Vec<ResultItem> {
        if !self.discovery.any_available() {
            return vec![domain::missing_tools_item()];
        }

        let exclusions = self.exclusions.read().clone();
        let apps = match self.runtime.block_on(self.resolver.resolve(&exclusions)) {
            Ok(apps) => apps,
            Err(Error::ToolUnavailable(tool)) => {
                warn!(tool = %tool, "discovery tooling unavailable");
                return vec![domain::missing_tools_item()];
            }
            Err(e) => {
                warn!(error = %e, "resolution failed");
                Vec::new()
            }
        };

        if apps.is_empty() {
            vec![domain::no_apps_item()]
        } else {
            vec![domain::quit_item(&apps)]
        }
    }

    // =========================================================================
    // Selection events
    // =========================================================================

    /// Handle an item-selection event.
    ///
    /// The payload is the JSON action attached to the selected item.
    /// Returns `true` when the host should dismiss its UI. Clipboard
    /// actions are performed by the host; unrecognized payloads are
    /// ignored.
    pub fn handle_enter(&self, payload: &str) -> bool {
        match serde_json::from_str::<ItemAction>(payload) {
            Ok(ItemAction::QuitApps { apps }) => {
                let outcomes = self.quit_apps(&apps);
                debug!(apps = outcomes.len(), "termination batch dispatched");
                true
            }
            Ok(ItemAction::CopyToClipboard { .. }) => true,
            Err(e) => {
                debug!(error = %e, "ignoring unrecognized selection payload");
                false
            }
        }
    }

    /// Terminate the given apps and report per-app outcomes.
    pub fn quit_apps(&self, apps: &[String]) -> BTreeMap<String, TerminationOutcome> {
        self.runtime.block_on(self.terminator.terminate_all(apps))
    }

    // =========================================================================
    // Preferences
    // =========================================================================

    /// Get the user's exclusion list.
    pub fn excluded_apps(&self) -> Result<String> {
        self.runtime.block_on(self.config.get_excluded_apps())
    }

    /// Set the user's exclusion list and refresh the cached set.
    pub fn set_excluded_apps(&self, excluded_apps: &str) -> Result<()> {
        self.runtime
            .block_on(self.config.set_excluded_apps(excluded_apps))?;
        *self.exclusions.write() = ExclusionSet::from_user_list(excluded_apps);
        Ok(())
    }

    /// Reload the exclusion preference from disk.
    pub fn reload_config(&self) -> Result<()> {
        let excluded_apps = self.runtime.block_on(self.config.get_excluded_apps())?;
        *self.exclusions.write() = ExclusionSet::from_user_list(&excluded_apps);
        Ok(())
    }

    /// True if at least one window discovery tool is installed.
    pub fn is_discovery_available(&self) -> bool {
        self.discovery.any_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_creation() {
        let engine = QuitAllEngine::new();
        assert!(engine.is_ok());
    }

    #[test]
    fn test_query_always_yields_an_item() {
        let engine = QuitAllEngine::new().unwrap();
        let items = engine.query();
        assert!(!items.is_empty());
        assert_eq!(engine.cached_items().len(), items.len());
    }

    #[test]
    fn test_unrecognized_payload_is_ignored() {
        let engine = QuitAllEngine::new().unwrap();
        assert!(!engine.handle_enter("not json"));
        assert!(!engine.handle_enter(r#"{"action":"reboot"}"#));
    }

    #[test]
    fn test_clipboard_action_dismisses() {
        let engine = QuitAllEngine::new().unwrap();
        assert!(engine.handle_enter(r#"{"action":"copy_to_clipboard","text":"hello"}"#));
    }

    #[test]
    fn test_quit_unknown_app_reports_not_found() {
        let engine = QuitAllEngine::new().unwrap();
        let apps = vec!["quitall-test-nonexistent".to_string()];
        let outcomes = engine.quit_apps(&apps);
        assert_eq!(
            outcomes["quitall-test-nonexistent"],
            TerminationOutcome::NotFound
        );
    }
}
