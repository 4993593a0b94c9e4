//! Live air-quality lookup: OpenWeatherMap for the AQI value, Nominatim for
//! the city name. Both calls are bounded by a hard timeout, and any failure
//! (no API key, network, malformed body) degrades to a synthetic estimate —
//! this endpoint never errors.

use ecotrack_core::airquality::{aqi_color, aqi_label, StatusColor};
use rand::Rng;
use serde::Serialize;
use std::time::Duration;

pub const DEFAULT_POLLUTION_URL: &str = "http://api.openweathermap.org/data/2.5/air_pollution";
pub const DEFAULT_GEOCODE_URL: &str = "https://nominatim.openstreetmap.org/reverse";

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Serialize)]
pub struct PollutionReport {
    pub status: StatusColor,
    pub aqi_value: u8,
    pub aqi_status: String,
    pub city: String,
    pub details: String,
}

pub struct AqiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    pollution_url: String,
    geocode_url: String,
}

impl AqiClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_endpoints(api_key, DEFAULT_POLLUTION_URL, DEFAULT_GEOCODE_URL)
    }

    pub fn with_endpoints(
        api_key: Option<String>,
        pollution_url: impl Into<String>,
        geocode_url: impl Into<String>,
    ) -> Self {
        let http = reqwest::Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .user_agent("ecotrack/0.1")
            .build()
            .unwrap_or_default();
        Self {
            http,
            api_key,
            pollution_url: pollution_url.into(),
            geocode_url: geocode_url.into(),
        }
    }

    /// Look up live air quality for a coordinate pair, falling back to a
    /// weighted-random estimate when the lookup cannot be completed.
    pub async fn lookup(&self, lat: f64, lon: f64) -> PollutionReport {
        match self.fetch(lat, lon).await {
            Ok(report) => report,
            Err(err) => {
                tracing::warn!("air quality lookup failed, using fallback: {err:#}");
                fallback_report(&mut rand::thread_rng())
            }
        }
    }

    async fn fetch(&self, lat: f64, lon: f64) -> anyhow::Result<PollutionReport> {
        let Some(key) = &self.api_key else {
            anyhow::bail!("no API key configured");
        };

        let url = format!("{}?lat={lat}&lon={lon}&appid={key}", self.pollution_url);
        let body: serde_json::Value = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        let aqi = body["list"][0]["main"]["aqi"]
            .as_u64()
            .ok_or_else(|| anyhow::anyhow!("malformed air pollution response"))?
            as u8;

        let label = aqi_label(aqi);
        let city = self
            .reverse_geocode(lat, lon)
            .await
            .unwrap_or_else(|_| "Unknown".to_string());

        Ok(PollutionReport {
            status: aqi_color(aqi),
            aqi_value: aqi,
            aqi_status: label.to_string(),
            details: format!(
                "The air quality in {city} is {label}. \
                 The Air Quality Index (AQI) is {aqi} on a scale of 1-5."
            ),
            city,
        })
    }

    async fn reverse_geocode(&self, lat: f64, lon: f64) -> anyhow::Result<String> {
        let url = format!(
            "{}?lat={lat}&lon={lon}&format=jsonv2&accept-language=en",
            self.geocode_url
        );
        let body: serde_json::Value = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let address = &body["address"];
        for key in ["city", "town", "village"] {
            if let Some(name) = address[key].as_str() {
                return Ok(name.to_string());
            }
        }
        Ok("Unknown".to_string())
    }
}

/// Synthetic report matching the live shape, with the AQI marked unknown.
pub fn fallback_report(rng: &mut impl Rng) -> PollutionReport {
    let status = StatusColor::sample(rng);
    PollutionReport {
        status,
        aqi_value: rng.gen_range(1..=5),
        aqi_status: "unknown".to_string(),
        city: "Unknown".to_string(),
        details: format!("The air quality in your area is estimated to be {status}."),
    }
}
