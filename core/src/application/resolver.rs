//! Resolution of open windowed apps.
//!
//! Two discovery strategies share one contract: return the sorted,
//! deduplicated identifiers of every app currently holding a visible
//! window, minus the exclusion set.
//!
//! The primary strategy walks window → pid → command name. The fallback
//! reads window-manager class names instead and is used whenever the
//! primary pass produces zero pids; an absent tool and a windowless
//! desktop are deliberately indistinguishable here.

use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use crate::domain::{class_prefix, normalize, ExclusionSet};
use crate::error::{Error, Result};
use crate::ports::{ProcessTablePort, WindowClassPort, WindowQueryPort};

/// Resolves the set of open windowed apps.
///
/// Generic over its probe ports so the discovery pipeline can be tested
/// against simulated window/process snapshots.
pub struct AppResolver<W, C, P> {
    windows: W,
    classes: C,
    processes: P,
}

impl<W, C, P> AppResolver<W, C, P>
where
    W: WindowQueryPort,
    C: WindowClassPort,
    P: ProcessTablePort,
{
    /// Create a resolver over the given probe ports.
    pub fn new(windows: W, classes: C, processes: P) -> Self {
        Self {
            windows,
            classes,
            processes,
        }
    }

    /// Resolve open apps, excluding protected names.
    ///
    /// Single-entity probe failures drop that entity and continue.
    /// `Err(ToolUnavailable)` is returned only when both discovery
    /// strategies fail to spawn their tool; every other degradation
    /// yields a (possibly empty) list.
    pub async fn resolve(&self, exclusions: &ExclusionSet) -> Result<Vec<String>> {
        let (pids, primary_missing) = self.visible_pids().await;

        if pids.is_empty() {
            return self.resolve_by_class(exclusions, primary_missing).await;
        }

        let mut apps = BTreeSet::new();
        for pid in pids {
            match self.processes.command_name(pid).await {
                Ok(name) => {
                    if let Some(app) = normalize(&name) {
                        if !exclusions.contains(&app) {
                            apps.insert(app);
                        }
                    }
                }
                // Process exited or lookup denied; drop this pid
                Err(e) => debug!(pid, error = %e, "command name lookup failed"),
            }
        }

        Ok(apps.into_iter().collect())
    }

    /// Primary strategy: enumerate visible windows and dedup their owners.
    async fn visible_pids(&self) -> (HashSet<u32>, bool) {
        let windows = match self.windows.visible_windows().await {
            Ok(windows) => windows,
            Err(e) => {
                let missing = matches!(e, Error::ToolUnavailable(_));
                debug!(error = %e, "window enumeration failed");
                return (HashSet::new(), missing);
            }
        };

        let mut pids = HashSet::new();
        for window in windows {
            match self.windows.window_pid(window).await {
                Ok(pid) => {
                    pids.insert(pid);
                }
                // Windows can vanish mid-enumeration
                Err(e) => debug!(window, error = %e, "pid lookup failed"),
            }
        }
        (pids, false)
    }

    /// Fallback strategy: derive identifiers from window class names.
    async fn resolve_by_class(
        &self,
        exclusions: &ExclusionSet,
        primary_missing: bool,
    ) -> Result<Vec<String>> {
        let classes = match self.classes.window_classes().await {
            Ok(classes) => classes,
            Err(Error::ToolUnavailable(tool)) if primary_missing => {
                return Err(Error::ToolUnavailable(tool));
            }
            Err(e) => {
                debug!(error = %e, "window class listing failed");
                Vec::new()
            }
        };

        let mut apps = BTreeSet::new();
        for class in classes {
            if let Some(app) = class_prefix(&class) {
                if !exclusions.contains(&app) {
                    apps.insert(app);
                }
            }
        }

        Ok(apps.into_iter().collect())
    }
}
