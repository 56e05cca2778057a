//! Plugin CLI commands.

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::state::AppState;

/// Resolve `plugin` through the registry and install it into `bot`.
pub async fn add_plugin(state: &AppState, bot: &str, plugin: &str, json: bool) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message(format!("Installing plugin '{plugin}'..."));
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    let installed = state.plugin_service.install(bot, plugin).await;

    spinner.finish_and_clear();
    let installed = installed?;

    if json {
        println!("{}", serde_json::to_string_pretty(&installed)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Plugin '{}' added to bot '{}'.",
        style("✓").green().bold(),
        style(&installed.plugin).cyan(),
        style(&installed.bot).cyan()
    );
    println!(
        "  {}  {}",
        style("Source:").bold(),
        style(&installed.repository).dim()
    );
    println!(
        "  {}  {}",
        style("Checkout:").bold(),
        style(installed.directory.display()).dim()
    );
    println!();

    Ok(())
}
