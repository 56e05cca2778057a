//! Bot lifecycle CLI commands: create, list, show, delete.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use dialoguer::{Confirm, Input, Password};
use indicatif::{ProgressBar, ProgressStyle};

use botforge_types::bot::CreateBotRequest;

use crate::state::AppState;

/// Create a new bot workspace, prompting for anything not given as a flag.
///
/// # Examples
///
/// ```bash
/// # Interactive
/// bforge create bot
///
/// # One-shot with flags
/// bforge create bot --name luna --token $TOKEN
/// ```
pub async fn create_bot(
    state: &AppState,
    name: Option<String>,
    token: Option<String>,
    json: bool,
) -> Result<()> {
    let name = match name {
        Some(n) => n,
        None => Input::<String>::new().with_prompt("Bot name").interact_text()?,
    };

    let token = match token {
        Some(t) => t,
        None => Password::new().with_prompt("Bot token").interact()?,
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message("Creating bot workspace...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    let request = CreateBotRequest { name, token };
    let created = state.bot_service.create(&request).await;

    spinner.finish_and_clear();
    let created = created?;

    if json {
        println!("{}", serde_json::to_string_pretty(&created)?);
        return Ok(());
    }

    println!();
    println!("  {} Bot created successfully!", style("✓").green().bold());
    println!();
    println!("  {}  {}", style("Name:").bold(), style(&created.name).cyan());
    println!(
        "  {}  {}",
        style("Directory:").bold(),
        style(created.directory.display()).dim()
    );
    println!();
    println!(
        "  Install a plugin: {}",
        style(format!("bforge plugin add {} <plugin>", created.name)).yellow()
    );
    println!();

    Ok(())
}

/// List all bot workspaces in a table.
pub async fn list_bots(state: &AppState, json: bool) -> Result<()> {
    let bots = state.bot_service.list().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&bots)?);
        return Ok(());
    }

    if bots.is_empty() {
        println!();
        println!(
            "  {} No bots found. Create one with: {}",
            style("i").blue().bold(),
            style("bforge create bot").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Name").fg(Color::White),
        Cell::new("Directory").fg(Color::White),
    ]);

    for name in &bots {
        table.add_row(vec![
            Cell::new(name).fg(Color::Cyan),
            Cell::new(state.workspace.bot_dir(name).display().to_string())
                .fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} bot{}",
        style(bots.len()).bold(),
        if bots.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

/// Show the composite view of one bot.
pub async fn show_bot(state: &AppState, name: &str, json: bool) -> Result<()> {
    let details = state.inspector.inspect(name).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&details)?);
        return Ok(());
    }

    println!();
    println!("  {}  {}", style("Name:").bold(), style(&details.name).cyan());
    println!(
        "  {}  {}",
        style("Directory:").bold(),
        style(details.directory.display()).dim()
    );
    println!(
        "  {}  {}",
        style("Manifest:").bold(),
        match &details.manifest {
            Some(_) => style("present").green(),
            None => style("absent").dim(),
        }
    );

    if details.plugins.is_empty() {
        println!("  {}  {}", style("Plugins:").bold(), style("none").dim());
    } else {
        println!("  {}", style("Plugins:").bold());
        for plugin in &details.plugins {
            println!("    {} {}", style("•").dim(), plugin);
        }
    }

    println!("  {}", style("Config:").bold());
    for line in serde_json::to_string_pretty(&details.config)?.lines() {
        println!("    {line}");
    }
    println!();

    Ok(())
}

/// Delete a bot workspace, confirming first unless forced.
pub async fn delete_bot(state: &AppState, name: &str, force: bool, json: bool) -> Result<()> {
    if !force && !json {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Permanently delete bot '{}' and all its plugins?",
                style(name).red().bold()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    state.bot_service.delete(name).await?;

    if json {
        println!("{}", serde_json::json!({"deleted": true, "name": name}));
    } else {
        println!("  {} Bot '{}' deleted.", style("✓").red().bold(), name);
    }

    Ok(())
}
