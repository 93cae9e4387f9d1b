use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "praying-daily",
    version,
    about = "A terminal companion for tracking daily prayer topics and reminders"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a prayer (or replace one with the same id)
    Add {
        /// Topic id (family, health, work, ...); unknown ids fall back to family
        #[arg(long, default_value = "family")]
        topic: String,
        /// Prayer name; defaults to "<Topic> Prayer"
        #[arg(long)]
        name: Option<String>,
        /// Day labels: single letters (M T W T F S S), "Daily" or "Weekdays"
        #[arg(long, num_args = 0.., value_delimiter = ',')]
        days: Vec<String>,
        /// Attach the daily reminder to this prayer
        #[arg(long)]
        reminder: bool,
        /// Replace the prayer with this id instead of creating a new one
        #[arg(long)]
        id: Option<String>,
    },
    /// Show the prayers for a date (default today), active then completed
    List {
        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
    },
    /// Mark a prayer completed
    Done {
        /// Prayer id
        id: String,
    },
    /// Mark a prayer not completed
    Undone {
        /// Prayer id
        id: String,
    },
    /// Delete a prayer
    Remove {
        /// Prayer id
        id: String,
    },
    /// Daily reminder management
    Remind {
        #[command(subcommand)]
        action: RemindCommands,
    },
    /// List the topic catalog
    Topics,
}

#[derive(Subcommand, Debug)]
pub enum RemindCommands {
    /// Set the reminder time (HH:MM, 24-hour)
    Set {
        /// Time of day, e.g. 07:00
        time: String,
    },
    /// Enable the reminder and schedule it at the stored time
    On,
    /// Disable the reminder and cancel the schedule
    Off,
    /// Show the stored preference and the active schedule
    Status,
}
