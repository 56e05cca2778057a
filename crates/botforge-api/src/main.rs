//! Botforge CLI and REST API entry point.
//!
//! Binary name: `bforge`
//!
//! Parses CLI arguments, initializes the workspace and services, then
//! dispatches to the appropriate command handler or starts the REST API
//! server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, ConfigCommand, CreateResource, DeleteResource, ListResource, PluginCommand};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,botforge=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "bforge", &mut std::io::stdout());
        return Ok(());
    }

    // Initialize application state (workspace root, services)
    let state = AppState::init().await?;

    match cli.command {
        Commands::Serve { port, host } => {
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  {} Botforge API listening on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!(
                "  {}  {}",
                console::style("Workspace:").bold(),
                console::style(state.workspace.root().display()).dim()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }

        Commands::Create { resource } => match resource {
            CreateResource::Bot { name, token } => {
                cli::bot::create_bot(&state, name, token, cli.json).await?;
            }
        },

        Commands::List { resource } => match resource {
            ListResource::Bots => {
                cli::bot::list_bots(&state, cli.json).await?;
            }
        },

        Commands::Show { name } => {
            cli::bot::show_bot(&state, &name, cli.json).await?;
        }

        Commands::Delete { resource } => match resource {
            DeleteResource::Bot { name, force } => {
                cli::bot::delete_bot(&state, &name, force, cli.json).await?;
            }
        },

        Commands::Plugin { action } => match action {
            PluginCommand::Add { bot, plugin } => {
                cli::plugin::add_plugin(&state, &bot, &plugin, cli.json).await?;
            }
        },

        Commands::Config { action } => match action {
            ConfigCommand::Set { bot, pairs } => {
                cli::config::set_config(&state, &bot, &pairs, cli.json).await?;
            }
        },

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM so `serve` can drain in-flight requests.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
