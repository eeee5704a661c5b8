//! Agenda - organisation schedule calendar
//!
//! Command-line entry point. Every subcommand prints its result as JSON.

mod cli;

use agenda_lib::commands;
use agenda_lib::AppContext;
use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match cli.config.clone() {
        Some(path) => agenda_infra::config::load_from_file(Some(path))?,
        None => agenda_infra::config::load_or_default()?,
    };
    agenda_infra::observability::init_from_config(&config.logging)?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(e) => warn!(error = %e, "Could not load .env file"),
    }

    let ctx = AppContext::new_with_config(config)
        .await
        .context("failed to initialise application context")?;

    run(&ctx, cli.command).await
}

async fn run(ctx: &AppContext, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Calendar { date, month } => {
            print_json(&commands::get_calendar_view(ctx, date.as_deref(), month.as_deref()).await?)
        }
        Commands::List => print_json(&commands::list_schedules(ctx).await?),
        Commands::Show { id } => print_json(&commands::get_schedule(ctx, id).await?),
        Commands::Add(args) => {
            print_json(&commands::create_schedule(ctx, args.into_draft()).await?)
        }
        Commands::Edit { id, draft } => {
            print_json(&commands::update_schedule(ctx, id, draft.into_draft()).await?)
        }
        Commands::Delete { id } => {
            commands::delete_schedule(ctx, id).await?;
            print_json(&serde_json::json!({ "deleted": id }))
        }
    }
}

#[allow(clippy::print_stdout)]
fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render output")?;
    println!("{rendered}");
    Ok(())
}
