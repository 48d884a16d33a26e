//! Config command - show and change the exclusion preference.

use anyhow::Result;
use quitall_core::{ConfigStore, PROTECTED_APPS};

pub async fn show(json: bool) -> Result<()> {
    let store = ConfigStore::new()?;
    let config = store.load().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let excluded = if config.excluded_apps.is_empty() {
        "(none)".to_string()
    } else {
        config.excluded_apps.clone()
    };
    println!("Excluded apps:  {}", excluded);
    println!("Built-in protected names: {}", PROTECTED_APPS.len());
    Ok(())
}

pub async fn set_excluded(list: &str) -> Result<()> {
    let store = ConfigStore::new()?;
    store.set_excluded_apps(list).await?;
    println!("Excluded apps updated.");
    Ok(())
}
