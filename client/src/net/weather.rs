//! Current-conditions lookups against OpenWeatherMap.

use async_trait::async_trait;
use serde::Deserialize;

use super::http::{join, transport_error};
use crate::error::ClientError;

pub const DEFAULT_OPENWEATHER_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Normalized current weather for one location.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherReport {
    pub city: String,
    pub country: Option<String>,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    /// Relative humidity in percent.
    pub humidity: u8,
    pub description: String,
    pub icon_url: Option<String>,
}

#[async_trait]
pub trait WeatherApi: Send + Sync {
    async fn current_by_city(&self, city: &str) -> Result<WeatherReport, ClientError>;
    async fn current_by_coords(&self, lat: f64, lon: f64) -> Result<WeatherReport, ClientError>;
}

// =============================================================================
// WIRE SHAPES
// =============================================================================

#[derive(Deserialize)]
struct OwmResponse {
    #[serde(default)]
    name: String,
    #[serde(default)]
    sys: Option<OwmSys>,
    main: OwmMain,
    #[serde(default)]
    weather: Vec<OwmCondition>,
}

#[derive(Deserialize)]
struct OwmSys {
    country: Option<String>,
}

#[derive(Deserialize)]
struct OwmMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Deserialize)]
struct OwmCondition {
    #[serde(default)]
    description: String,
    icon: Option<String>,
}

/// OpenWeatherMap error body; `cod` is sometimes a string, sometimes a number.
#[derive(Deserialize)]
struct OwmError {
    message: String,
}

impl From<OwmResponse> for WeatherReport {
    fn from(resp: OwmResponse) -> Self {
        let condition = resp.weather.into_iter().next();
        Self {
            city: resp.name,
            country: resp.sys.and_then(|s| s.country),
            temperature_c: resp.main.temp,
            feels_like_c: resp.main.feels_like,
            humidity: resp.main.humidity,
            description: condition
                .as_ref()
                .map(|c| c.description.clone())
                .unwrap_or_default(),
            icon_url: condition.and_then(|c| c.icon).map(|icon| icon_url(&icon)),
        }
    }
}

#[must_use]
pub fn icon_url(icon: &str) -> String {
    format!("https://openweathermap.org/img/wn/{icon}@2x.png")
}

// =============================================================================
// CLIENT
// =============================================================================

/// reqwest-backed [`WeatherApi`]. Temperatures are requested in metric units.
#[derive(Clone, Debug)]
pub struct OpenWeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_OPENWEATHER_URL, api_key)
    }

    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.into(), api_key: api_key.into() }
    }

    async fn fetch(&self, params: &[(&str, String)]) -> Result<WeatherReport, ClientError> {
        let url = join(&self.base_url, "/weather");
        let resp = self
            .http
            .get(url)
            .query(params)
            .query(&[("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        let body = resp.text().await.map_err(transport_error)?;
        if !status.is_success() {
            let message = serde_json::from_str::<OwmError>(&body)
                .map(|e| e.message)
                .unwrap_or_else(|_| status.to_string());
            tracing::warn!(status = status.as_u16(), %message, "weather lookup failed");
            return Err(ClientError::Status { status: status.as_u16(), message });
        }
        let parsed: OwmResponse = serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(parsed.into())
    }
}

#[async_trait]
impl WeatherApi for OpenWeatherClient {
    async fn current_by_city(&self, city: &str) -> Result<WeatherReport, ClientError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(ClientError::Validation("Enter a city name.".into()));
        }
        self.fetch(&[("q", city.to_owned())]).await
    }

    async fn current_by_coords(&self, lat: f64, lon: f64) -> Result<WeatherReport, ClientError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(ClientError::Validation("Coordinates out of range.".into()));
        }
        self.fetch(&[("lat", lat.to_string()), ("lon", lon.to_string())])
            .await
    }
}

#[cfg(test)]
#[path = "weather_test.rs"]
mod weather_test;
