//! Command-line surface for the schedule calendar.

use std::path::PathBuf;

use agenda_core::ScheduleDraft;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "agenda", version, about = "Kalender jadwal organisasi")]
pub struct Cli {
    /// Configuration file (JSON or TOML). Falls back to env vars and the
    /// standard search paths when omitted.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show marked dates and the agenda for one day
    Calendar {
        /// Selected day (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Restrict marked dates to one month (YYYY-MM)
        #[arg(long)]
        month: Option<String>,
    },
    /// List all schedules as table rows
    List,
    /// Show one schedule
    Show { id: i64 },
    /// Create a schedule
    Add(DraftArgs),
    /// Replace an existing schedule
    Edit {
        id: i64,
        #[command(flatten)]
        draft: DraftArgs,
    },
    /// Delete a schedule
    Delete { id: i64 },
}

#[derive(Debug, Args)]
pub struct DraftArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    /// Start day (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: NaiveDate,
    /// Start time (HH:mm)
    #[arg(long, default_value = "09:00")]
    pub start_time: String,
    /// End day (YYYY-MM-DD), defaults to the start day
    #[arg(long)]
    pub end_date: Option<NaiveDate>,
    /// End time (HH:mm)
    #[arg(long, default_value = "17:00")]
    pub end_time: String,
}

impl DraftArgs {
    pub fn into_draft(self) -> ScheduleDraft {
        let end_date = self.end_date.unwrap_or(self.start_date);
        ScheduleDraft {
            title: self.title,
            description: self.description,
            location: self.location,
            start_date: self.start_date,
            start_time: self.start_time,
            end_date,
            end_time: self.end_time,
        }
    }
}
