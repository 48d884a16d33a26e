//! Quit command - terminate apps by name or all at once.

use anyhow::Result;
use quitall_core::adapters::UnixSignals;
use quitall_core::domain::normalize;
use quitall_core::Terminator;

use super::{load_exclusions, resolve_open_apps};

pub async fn run(apps: Vec<String>, all: bool, json: bool) -> Result<()> {
    let targets: Vec<String> = if all {
        let exclusions = load_exclusions().await?;
        resolve_open_apps(&exclusions).await?
    } else if apps.is_empty() {
        anyhow::bail!("pass app names, or --all to quit every open app");
    } else {
        apps.iter().filter_map(|app| normalize(app)).collect()
    };

    if targets.is_empty() {
        println!("Nothing to quit.");
        return Ok(());
    }

    let terminator = Terminator::new(UnixSignals::new());
    let outcomes = terminator.terminate_all(&targets).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
        return Ok(());
    }

    println!("{:<24} OUTCOME", "APP");
    println!("{}", "-".repeat(40));
    for (app, outcome) in &outcomes {
        println!("{:<24} {}", app, outcome);
    }

    Ok(())
}
