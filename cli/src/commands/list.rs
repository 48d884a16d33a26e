//! List command - show open windowed apps.

use anyhow::Result;
use quitall_core::adapters::ToolDiscovery;
use quitall_core::INSTALL_HINT;

use super::{load_exclusions, resolve_open_apps};

pub async fn run(json: bool) -> Result<()> {
    let discovery = ToolDiscovery::new();
    if !discovery.any_available() {
        anyhow::bail!("no window discovery tool found; try: {}", INSTALL_HINT);
    }

    let exclusions = load_exclusions().await?;
    let apps = resolve_open_apps(&exclusions).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&apps)?);
        return Ok(());
    }

    if apps.is_empty() {
        println!("No open apps found.");
        return Ok(());
    }

    for app in &apps {
        println!("{}", app);
    }

    println!("\nTotal: {} apps", apps.len());
    Ok(())
}
