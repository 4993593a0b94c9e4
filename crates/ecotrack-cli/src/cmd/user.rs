use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use ecotrack_core::tracker::{DailyTask, EcoTracker};
use std::path::Path;

#[derive(Subcommand)]
pub enum UserSubcommand {
    /// Initialize a user record
    Init { user_id: String },
    /// Show the user's daily task
    Task { user_id: String },
    /// Mark a pending action as completed
    Complete { user_id: String, action_id: u32 },
    /// Show points, completed and pending actions
    Stats { user_id: String },
    /// Record the user's location
    Location {
        user_id: String,
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },
}

pub fn run(root: &Path, subcmd: UserSubcommand, json: bool) -> anyhow::Result<()> {
    let mut tracker = EcoTracker::new(root);

    match subcmd {
        UserSubcommand::Init { user_id } => {
            let created = tracker
                .initialize_user(&user_id)
                .with_context(|| format!("failed to initialize user '{user_id}'"))?;
            if json {
                print_json(&serde_json::json!({ "user_id": user_id, "created": created }))?;
            } else if created {
                println!("Initialized user '{user_id}'");
            } else {
                println!("User '{user_id}' already exists");
            }
            Ok(())
        }
        UserSubcommand::Task { user_id } => {
            let task = tracker
                .daily_task(&user_id)
                .with_context(|| format!("failed to resolve daily task for '{user_id}'"))?;
            match task {
                DailyTask::Assigned(action) => {
                    if json {
                        print_json(&action)?;
                    } else {
                        println!(
                            "Today's task: {} ({} pts)\n{}",
                            action.description, action.points, action.details
                        );
                    }
                }
                DailyTask::NonePending => {
                    if json {
                        print_json(&serde_json::Value::Null)?;
                    } else {
                        println!("No pending tasks available");
                    }
                }
            }
            Ok(())
        }
        UserSubcommand::Complete { user_id, action_id } => {
            let receipt = tracker
                .complete_action(&user_id, action_id)
                .with_context(|| format!("failed to complete action {action_id}"))?;
            if json {
                print_json(&receipt)?;
            } else {
                println!(
                    "Completed action {action_id}: +{} pts (total {})",
                    receipt.points_earned, receipt.total_points
                );
            }
            Ok(())
        }
        UserSubcommand::Stats { user_id } => {
            let stats = tracker
                .user_stats(&user_id)
                .with_context(|| format!("failed to load stats for '{user_id}'"))?;
            if json {
                print_json(&stats)?;
                return Ok(());
            }

            println!("User: {user_id}");
            println!("Points: {}", stats.points);
            if let Some(task) = &stats.daily_task {
                println!("Daily task: {} ({} pts)", task.description, task.points);
            }
            if let Some(loc) = &stats.location {
                println!("Location: {}, {}", loc.latitude, loc.longitude);
            }

            let rows: Vec<Vec<String>> = stats
                .completed_actions
                .iter()
                .map(|a| (a, "done"))
                .chain(stats.pending_actions.iter().map(|a| (a, "pending")))
                .map(|(a, status)| {
                    vec![
                        a.id.to_string(),
                        status.to_string(),
                        a.points.to_string(),
                        a.description.clone(),
                    ]
                })
                .collect();
            print_table(&["ID", "STATUS", "POINTS", "DESCRIPTION"], rows);
            Ok(())
        }
        UserSubcommand::Location {
            user_id,
            latitude,
            longitude,
        } => {
            tracker
                .set_location(&user_id, latitude, longitude)
                .with_context(|| format!("failed to set location for '{user_id}'"))?;
            if json {
                print_json(&serde_json::json!({
                    "user_id": user_id,
                    "latitude": latitude,
                    "longitude": longitude,
                }))?;
            } else {
                println!("Recorded location {latitude}, {longitude} for '{user_id}'");
            }
            Ok(())
        }
    }
}
