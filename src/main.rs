mod cli;
mod config;
mod days;
mod models;
mod reminder;
mod store;

use anyhow::Result;
use clap::Parser;

use cli::args::{Cli, Commands, RemindCommands};
use cli::handlers;
use config::AppPaths;
use reminder::FileBackedNotifier;
use store::{PrayerStore, PreferenceStore};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    AppPaths::ensure_data_dir()?;
    let prayers = PrayerStore::open(AppPaths::prayers_path()?);
    let preferences = PreferenceStore::open(AppPaths::reminder_preference_path()?);
    let notifier = FileBackedNotifier::new(AppPaths::scheduled_reminder_path()?);

    match cli.command {
        Commands::Add { topic, name, days, reminder, id } => {
            handlers::handle_add(&prayers, &topic, name, days, reminder, id).await?;
        }
        Commands::List { date } => {
            handlers::handle_list(&prayers, date).await?;
        }
        Commands::Done { id } => {
            handlers::handle_set_completed(&prayers, &id, true).await?;
        }
        Commands::Undone { id } => {
            handlers::handle_set_completed(&prayers, &id, false).await?;
        }
        Commands::Remove { id } => {
            handlers::handle_remove(&prayers, &id).await?;
        }
        Commands::Remind { action } => match action {
            RemindCommands::Set { time } => {
                handlers::handle_remind_set(&preferences, &notifier, &time).await?;
            }
            RemindCommands::On => {
                handlers::handle_remind_on(&preferences, &notifier).await?;
            }
            RemindCommands::Off => {
                handlers::handle_remind_off(&preferences, &notifier).await?;
            }
            RemindCommands::Status => {
                handlers::handle_remind_status(&preferences, &notifier).await?;
            }
        },
        Commands::Topics => {
            handlers::handle_topics()?;
        }
    }

    Ok(())
}
