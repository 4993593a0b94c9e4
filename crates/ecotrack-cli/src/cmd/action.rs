use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use ecotrack_core::tracker::EcoTracker;
use std::path::Path;

#[derive(Subcommand)]
pub enum ActionSubcommand {
    /// List the eco action catalog
    List,
    /// Add a new eco action
    Add {
        description: String,
        #[arg(long, default_value = "5")]
        points: u32,
        #[arg(long, default_value = "")]
        details: String,
    },
}

pub fn run(root: &Path, subcmd: ActionSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ActionSubcommand::List => list(root, json),
        ActionSubcommand::Add {
            description,
            points,
            details,
        } => add(root, &description, points, &details, json),
    }
}

fn list(root: &Path, json: bool) -> anyhow::Result<()> {
    let tracker = EcoTracker::new(root);
    let actions = tracker.actions().context("failed to load action catalog")?;

    if json {
        print_json(&actions)?;
        return Ok(());
    }

    let rows: Vec<Vec<String>> = actions
        .iter()
        .map(|a| {
            vec![
                a.id.to_string(),
                a.points.to_string(),
                a.description.clone(),
            ]
        })
        .collect();
    print_table(&["ID", "POINTS", "DESCRIPTION"], rows);
    Ok(())
}

fn add(
    root: &Path,
    description: &str,
    points: u32,
    details: &str,
    json: bool,
) -> anyhow::Result<()> {
    let mut tracker = EcoTracker::new(root);
    let action = tracker
        .add_action(description, points, details)
        .context("failed to add action")?;

    if json {
        print_json(&action)?;
    } else {
        println!(
            "Added action {}: {} ({} pts)",
            action.id, action.description, action.points
        );
    }
    Ok(())
}
