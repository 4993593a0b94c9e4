use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use ecotrack_core::content::{Notifications, Tips};
use std::path::Path;

#[derive(Subcommand)]
pub enum ContentSubcommand {
    /// Print one at random
    Random,
    /// Add a new entry
    Add { message: String },
    /// List all entries
    List,
}

pub fn run_tips(root: &Path, subcmd: ContentSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ContentSubcommand::Random => {
            let tips = Tips::load(root).context("failed to load tips")?;
            let pick = tips.random(&mut rand::thread_rng()).to_string();
            if json {
                print_json(&serde_json::json!({ "tip": pick }))?;
            } else {
                println!("{pick}");
            }
            Ok(())
        }
        ContentSubcommand::Add { message } => {
            let mut tips = Tips::load(root).context("failed to load tips")?;
            tips.add(message).context("failed to add tip")?;
            tips.save(root).context("failed to save tips")?;
            if !json {
                println!("Tip added");
            }
            Ok(())
        }
        ContentSubcommand::List => {
            let tips = Tips::load(root).context("failed to load tips")?;
            if json {
                print_json(&tips.tips)?;
            } else {
                for tip in &tips.tips {
                    println!("{tip}");
                }
            }
            Ok(())
        }
    }
}

pub fn run_notifications(root: &Path, subcmd: ContentSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ContentSubcommand::Random => {
            let notifications = Notifications::load(root).context("failed to load notifications")?;
            let pick = notifications.random(&mut rand::thread_rng()).to_string();
            if json {
                print_json(&serde_json::json!({ "notification": pick }))?;
            } else {
                println!("{pick}");
            }
            Ok(())
        }
        ContentSubcommand::Add { message } => {
            let mut notifications =
                Notifications::load(root).context("failed to load notifications")?;
            notifications.add(message).context("failed to add notification")?;
            notifications
                .save(root)
                .context("failed to save notifications")?;
            if !json {
                println!("Notification added");
            }
            Ok(())
        }
        ContentSubcommand::List => {
            let notifications = Notifications::load(root).context("failed to load notifications")?;
            if json {
                print_json(&notifications.notifications)?;
            } else {
                for message in &notifications.notifications {
                    println!("{message}");
                }
            }
            Ok(())
        }
    }
}
