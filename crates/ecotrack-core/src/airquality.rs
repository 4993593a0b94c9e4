//! City pollution board and AQI classification.
//!
//! The board is demo data: statuses are re-rolled with a fixed weighting on
//! every read instead of being fetched live. The live per-location lookup
//! (OpenWeatherMap + reverse geocoding) lives in the server crate; only the
//! AQI scale mapping is shared here.

use crate::error::Result;
use crate::paths;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

// ---------------------------------------------------------------------------
// Status colors and AQI scale
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Green,
    Yellow,
    Red,
}

impl StatusColor {
    /// Weighted demo distribution: 40% green, 40% yellow, 20% red.
    pub fn sample(rng: &mut impl Rng) -> Self {
        const WEIGHTED: [(StatusColor, f64); 3] = [
            (StatusColor::Green, 0.4),
            (StatusColor::Yellow, 0.4),
            (StatusColor::Red, 0.2),
        ];
        WEIGHTED
            .choose_weighted(rng, |&(_, w)| w)
            .map(|&(color, _)| color)
            .unwrap_or(StatusColor::Yellow)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusColor::Green => "green",
            StatusColor::Yellow => "yellow",
            StatusColor::Red => "red",
        }
    }
}

impl fmt::Display for StatusColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label for the OpenWeatherMap AQI scale (1 best, 5 worst).
pub fn aqi_label(aqi: u8) -> &'static str {
    match aqi {
        1 => "good",
        2 => "fair",
        3 => "moderate",
        4 => "poor",
        _ => "very poor",
    }
}

/// Traffic-light color for an AQI value.
pub fn aqi_color(aqi: u8) -> StatusColor {
    match aqi {
        1 | 2 => StatusColor::Green,
        3 => StatusColor::Yellow,
        _ => StatusColor::Red,
    }
}

// ---------------------------------------------------------------------------
// CityBoard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub status: StatusColor,
    pub latitude: f64,
    pub longitude: f64,
}

/// The persisted set of tracked cities with their last rolled statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityBoard {
    pub cities: Vec<City>,
}

impl CityBoard {
    /// Load from disk, seeding the default ten US cities when missing.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::cities_path(root);
        if !path.exists() {
            let board = Self {
                cities: default_cities(),
            };
            board.save(root)?;
            return Ok(board);
        }
        let data = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        crate::io::atomic_write(&paths::cities_path(root), data.as_bytes())
    }

    /// Re-roll every city's status with the demo weighting.
    pub fn refresh_statuses(&mut self, rng: &mut impl Rng) {
        for city in &mut self.cities {
            city.status = StatusColor::sample(rng);
        }
    }
}

fn default_cities() -> Vec<City> {
    let entries: [(&str, StatusColor, f64, f64); 10] = [
        ("New York", StatusColor::Yellow, 40.7128, -74.0060),
        ("Los Angeles", StatusColor::Red, 34.0522, -118.2437),
        ("Chicago", StatusColor::Green, 41.8781, -87.6298),
        ("Houston", StatusColor::Yellow, 29.7604, -95.3698),
        ("Phoenix", StatusColor::Red, 33.4484, -112.0740),
        ("Philadelphia", StatusColor::Green, 39.9526, -75.1652),
        ("San Antonio", StatusColor::Yellow, 29.4241, -98.4936),
        ("San Diego", StatusColor::Green, 32.7157, -117.1611),
        ("Dallas", StatusColor::Yellow, 32.7767, -96.7970),
        ("San Jose", StatusColor::Green, 37.3382, -121.8863),
    ];
    entries
        .iter()
        .map(|&(name, status, latitude, longitude)| City {
            name: name.to_string(),
            status,
            latitude,
            longitude,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
