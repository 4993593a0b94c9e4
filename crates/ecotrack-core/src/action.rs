use crate::error::{EcoError, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// One eco-friendly behavior with a point reward. Catalog entries are shared
/// by all users and never deleted; ids are never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub id: u32,
    pub description: String,
    pub points: u32,
    #[serde(default)]
    pub details: String,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The shared action catalog, persisted as a single JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub actions: Vec<Action>,
}

impl Catalog {
    /// Load the catalog from disk. A missing file seeds the built-in default
    /// catalog and persists it; a corrupt file is a hard error.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::actions_path(root);
        if !path.exists() {
            let catalog = Self {
                actions: default_actions(),
            };
            catalog.save(root)?;
            return Ok(catalog);
        }
        let data = std::fs::read_to_string(&path)?;
        let catalog: Catalog = serde_json::from_str(&data)?;
        Ok(catalog)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::actions_path(root);
        let data = serde_json::to_string_pretty(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn get(&self, id: u32) -> Option<&Action> {
        self.actions.iter().find(|a| a.id == id)
    }

    pub fn ids(&self) -> Vec<u32> {
        self.actions.iter().map(|a| a.id).collect()
    }

    /// Next catalog id: max existing + 1, starting at 1 when empty.
    pub fn next_id(&self) -> u32 {
        self.actions.iter().map(|a| a.id).max().unwrap_or(0) + 1
    }

    /// Append a new action with a freshly assigned id.
    pub fn add(
        &mut self,
        description: impl Into<String>,
        points: u32,
        details: impl Into<String>,
    ) -> Result<Action> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(EcoError::EmptyDescription);
        }
        let action = Action {
            id: self.next_id(),
            description,
            points,
            details: details.into(),
        };
        self.actions.push(action.clone());
        Ok(action)
    }
}

/// The seed catalog written on first run.
pub fn default_actions() -> Vec<Action> {
    let entries: [(&str, u32, &str); 20] = [
        (
            "Use reusable shopping bags",
            5,
            "Saves 500 plastic bags per year",
        ),
        (
            "Take public transportation instead of driving",
            10,
            "Reduces CO2 by 4,800 lbs annually",
        ),
        (
            "Turn off lights when leaving rooms",
            3,
            "Saves 1,000 lbs of CO2 per year",
        ),
        (
            "Use a reusable water bottle",
            5,
            "Prevents 167 plastic bottles annually",
        ),
        (
            "Eat a vegetarian meal",
            8,
            "Saves 1,100 gallons of water per meal",
        ),
        (
            "Reduce shower time by 2 minutes",
            7,
            "Saves up to 150 gallons per month",
        ),
        (
            "Use a reusable coffee cup",
            5,
            "Saves 23 lbs of waste per year",
        ),
        (
            "Properly recycle all eligible items today",
            6,
            "Diverts waste from landfills",
        ),
        (
            "Unplug electronics not in use",
            4,
            "Reduces phantom energy consumption by 10%",
        ),
        (
            "Pick up litter in your neighborhood",
            15,
            "Prevents pollution of local waterways",
        ),
        (
            "Air dry laundry instead of using dryer",
            8,
            "Saves 4 lbs of CO2 per load",
        ),
        (
            "Compost food scraps",
            7,
            "Reduces methane emissions from landfills",
        ),
        (
            "Plant a tree or garden plant",
            20,
            "A single tree absorbs 48 lbs of CO2 annually",
        ),
        (
            "Use natural light instead of artificial when possible",
            3,
            "Reduces energy usage by up to 10%",
        ),
        (
            "Wash clothes in cold water",
            5,
            "Saves 90% of washing machine energy",
        ),
        (
            "Walked/biked/took public transport to work/school",
            10,
            "Reduces carbon emissions from personal vehicles",
        ),
        (
            "Used no plastic water bottles today",
            5,
            "Prevents plastic waste and pollution",
        ),
        (
            "Recycled paper, plastic, and glass today",
            7,
            "Reduces landfill waste and conserves resources",
        ),
        (
            "Bought local produce from farmers market",
            8,
            "Reduces transportation emissions and supports local economy",
        ),
        (
            "Used reusable bags for all shopping today",
            6,
            "Prevents single-use plastic bag waste",
        ),
    ];

    entries
        .iter()
        .enumerate()
        .map(|(i, &(description, points, details))| Action {
            id: i as u32 + 1,
            description: description.to_string(),
            points,
            details: details.to_string(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
