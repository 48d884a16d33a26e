//! CLI command implementations.

pub mod config;
pub mod list;
pub mod quit;

use anyhow::Result;
use quitall_core::adapters::{PsProcessTable, WmctrlWindows, XdotoolWindows};
use quitall_core::{AppResolver, ConfigStore, ExclusionSet};

/// Build the exclusion set from the stored preference.
pub(crate) async fn load_exclusions() -> Result<ExclusionSet> {
    let excluded = ConfigStore::new()?.get_excluded_apps().await?;
    Ok(ExclusionSet::from_user_list(&excluded))
}

/// Resolve open apps with the real system adapters.
pub(crate) async fn resolve_open_apps(exclusions: &ExclusionSet) -> Result<Vec<String>> {
    let resolver = AppResolver::new(
        XdotoolWindows::new(),
        WmctrlWindows::new(),
        PsProcessTable::new(),
    );
    Ok(resolver.resolve(exclusions).await?)
}
