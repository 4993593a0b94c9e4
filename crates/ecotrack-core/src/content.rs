//! Environmental notifications and tips: flat lists of strings served by
//! uniform random pick, with a validated append for new entries.

use crate::error::{EcoError, Result};
use crate::paths;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notifications {
    pub notifications: Vec<String>,
}

impl Notifications {
    /// Load from disk, seeding the built-in list when the file is missing.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::notifications_path(root);
        if !path.exists() {
            let seeded = Self {
                notifications: default_notifications(),
            };
            seeded.save(root)?;
            return Ok(seeded);
        }
        let data = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        crate::io::atomic_write(&paths::notifications_path(root), data.as_bytes())
    }

    pub fn random(&self, rng: &mut impl Rng) -> &str {
        self.notifications
            .choose(rng)
            .map(String::as_str)
            .unwrap_or("Please help protect our environment today!")
    }

    pub fn add(&mut self, message: impl Into<String>) -> Result<()> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(EcoError::EmptyMessage);
        }
        self.notifications.push(message);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tips
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tips {
    pub tips: Vec<String>,
}

impl Tips {
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::tips_path(root);
        if !path.exists() {
            let seeded = Self {
                tips: default_tips(),
            };
            seeded.save(root)?;
            return Ok(seeded);
        }
        let data = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        crate::io::atomic_write(&paths::tips_path(root), data.as_bytes())
    }

    pub fn random(&self, rng: &mut impl Rng) -> &str {
        self.tips
            .choose(rng)
            .map(String::as_str)
            .unwrap_or("No tips available.")
    }

    pub fn add(&mut self, tip: impl Into<String>) -> Result<()> {
        let tip = tip.into();
        if tip.trim().is_empty() {
            return Err(EcoError::EmptyMessage);
        }
        self.tips.push(tip);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Seed content
// ---------------------------------------------------------------------------

fn default_notifications() -> Vec<String> {
    [
        "Did you know? 100,000 marine animals die each year from plastic entanglement.",
        "Today's a great day to plant a tree! One tree can absorb up to 48 pounds of CO2 per year.",
        "Choose reusable over disposable items to reduce landfill waste.",
        "A single plastic bag can take up to 1,000 years to decompose.",
        "The average person generates over 4 pounds of trash daily!",
        "Recycling one aluminum can saves enough energy to run a TV for 3 hours.",
        "Taking public transportation instead of driving saves approximately 20 pounds of CO2 emissions daily.",
        "The Great Pacific Garbage Patch is now twice the size of Texas.",
        "Air pollution causes about 7 million premature deaths worldwide each year.",
        "Americans use 500 million plastic straws every day – enough to circle the Earth twice!",
        "A vegetarian diet reduces your carbon footprint by up to 73%.",
        "Turning off the tap while brushing teeth can save up to 8 gallons of water per day.",
        "Using LED bulbs reduces energy consumption by up to 80% compared to incandescent bulbs.",
        "The fashion industry is responsible for 10% of global carbon emissions.",
        "Electronic waste is the fastest-growing waste stream in the world.",
        "Over 1 billion people lack access to clean drinking water worldwide.",
        "Renewable energy now accounts for over 26% of global electricity generation.",
        "Eating locally produced food can reduce transportation emissions by up to 25%.",
        "An estimated 18 million acres of forest are lost each year to deforestation.",
        "Switching to a reusable water bottle saves an average of 156 plastic bottles annually per person.",
        "The Earth's average temperature has increased by 1.1°C since the pre-industrial era.",
        "Up to 40% of food produced in the United States is never eaten.",
        "Americans throw away enough office paper each year to build a 12-foot wall from NY to CA.",
        "The oceans absorb about 30% of the CO2 produced by humans, causing ocean acidification.",
        "Solar panels can reduce a household's carbon footprint by an average of 80%.",
        "Your small actions today create big change for tomorrow's planet!",
        "Earth is the only planet with life that we know of—let's keep it habitable!",
        "Every eco-friendly choice matters. Thank you for making a difference!",
        "Green living isn't just good for the planet—it's good for your health too.",
        "Be the change you wish to see in the world. Go green today!",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_tips() -> Vec<String> {
    [
        "Turn off lights when leaving a room to save energy.",
        "Use reusable shopping bags to reduce plastic waste.",
        "Take shorter showers to conserve water.",
        "Unplug electronics when not in use to avoid phantom energy usage.",
        "Use public transportation or carpool to reduce emissions.",
        "Buy local produce to reduce transportation emissions.",
        "Plant trees or support reforestation projects.",
        "Use energy-efficient light bulbs in your home.",
        "Reduce meat consumption, especially beef.",
        "Compost food scraps to reduce landfill waste.",
        "Fix leaky faucets to save water.",
        "Use a refillable water bottle instead of buying plastic bottles.",
        "Lower your thermostat by 1-2 degrees in winter to save energy.",
        "Wash clothes in cold water to reduce energy usage.",
        "Line dry clothes instead of using a dryer when possible.",
        "Recycle paper, plastic, glass, and metal properly.",
        "Use digital documents instead of printing when possible.",
        "Support renewable energy through your energy provider.",
        "Insulate your home properly to reduce heating/cooling needs.",
        "Use natural cleaning products to reduce chemical pollution.",
        "Buy secondhand items to reduce manufacturing demands.",
        "Maintain your car properly for optimal fuel efficiency.",
        "Use a programmable thermostat to reduce energy use when away.",
        "Choose products with minimal packaging.",
        "Start a backyard garden to grow some of your own food.",
        "Turn off the water while brushing teeth or washing dishes.",
        "Use a reusable mug for coffee or tea.",
        "Properly dispose of hazardous waste like batteries and electronics.",
        "Eat seasonal foods to reduce energy used in production.",
        "Use natural light when possible instead of artificial lighting.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    #[test]
    fn notifications_seed_on_first_load() {
        let dir = TempDir::new().unwrap();
        let notifications = Notifications::load(dir.path()).unwrap();
        assert_eq!(notifications.notifications.len(), 30);
        assert!(paths::notifications_path(dir.path()).exists());
    }

    #[test]
    fn tips_seed_on_first_load() {
        let dir = TempDir::new().unwrap();
        let tips = Tips::load(dir.path()).unwrap();
        assert_eq!(tips.tips.len(), 30);
    }

    #[test]
    fn random_pick_is_a_member() {
        let dir = TempDir::new().unwrap();
        let tips = Tips::load(dir.path()).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10 {
            let pick = tips.random(&mut rng).to_string();
            assert!(tips.tips.contains(&pick));
        }
    }

    #[test]
    fn random_pick_on_empty_list_falls_back() {
        let tips = Tips { tips: vec![] };
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(tips.random(&mut rng), "No tips available.");
    }

    #[test]
    fn add_persists_and_rejects_blank() {
        let dir = TempDir::new().unwrap();
        let mut notifications = Notifications::load(dir.path()).unwrap();

        assert!(matches!(
            notifications.add("  "),
            Err(EcoError::EmptyMessage)
        ));

        notifications.add("Composting week starts Monday.").unwrap();
        notifications.save(dir.path()).unwrap();

        let loaded = Notifications::load(dir.path()).unwrap();
        assert_eq!(loaded.notifications.len(), 31);
        assert!(loaded
            .notifications
            .contains(&"Composting week starts Monday.".to_string()));
    }
}
