//! Client configuration loaded from the environment.
//!
//! Each external service is optional. A page whose key is missing gets a
//! [`ClientError::Config`] from the matching factory instead of a client.

use crate::error::ClientError;
use crate::identity::firebase::FirebaseAuth;
use crate::net::catalog::CatalogClient;
use crate::net::functions::FunctionsClient;
use crate::net::geocode::MapboxGeocoder;
use crate::net::weather::OpenWeatherClient;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the functions server (`countBooks`, `sendEmail`, `/api/*`).
    pub api_url: String,
    pub firebase_api_key: Option<String>,
    pub openweather_api_key: Option<String>,
    pub mapbox_access_token: Option<String>,
}

impl ClientConfig {
    /// Load from `BOOKSHELF_API_URL`, `FIREBASE_API_KEY`,
    /// `OPENWEATHER_API_KEY`, and `MAPBOX_ACCESS_TOKEN`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Values baked in when the WASM bundle was built. The browser has no
    /// process environment, so the hydrated app reads these instead.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_vars(|key| {
            let value = match key {
                "BOOKSHELF_API_URL" => option_env!("BOOKSHELF_API_URL"),
                "FIREBASE_API_KEY" => option_env!("FIREBASE_API_KEY"),
                "OPENWEATHER_API_KEY" => option_env!("OPENWEATHER_API_KEY"),
                "MAPBOX_ACCESS_TOKEN" => option_env!("MAPBOX_ACCESS_TOKEN"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    pub(crate) fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| get(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        Self {
            api_url: non_blank("BOOKSHELF_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_owned()),
            firebase_api_key: non_blank("FIREBASE_API_KEY"),
            openweather_api_key: non_blank("OPENWEATHER_API_KEY"),
            mapbox_access_token: non_blank("MAPBOX_ACCESS_TOKEN"),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> CatalogClient {
        CatalogClient::new(self.api_url.clone())
    }

    #[must_use]
    pub fn functions(&self) -> FunctionsClient {
        FunctionsClient::new(self.api_url.clone())
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when `FIREBASE_API_KEY` is unset.
    pub fn identity_provider(&self) -> Result<FirebaseAuth, ClientError> {
        self.firebase_api_key
            .as_deref()
            .map(FirebaseAuth::new)
            .ok_or(ClientError::Config("FIREBASE_API_KEY"))
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when `OPENWEATHER_API_KEY` is unset.
    pub fn weather(&self) -> Result<OpenWeatherClient, ClientError> {
        self.openweather_api_key
            .as_deref()
            .map(OpenWeatherClient::new)
            .ok_or(ClientError::Config("OPENWEATHER_API_KEY"))
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when `MAPBOX_ACCESS_TOKEN` is unset.
    pub fn geocoder(&self) -> Result<MapboxGeocoder, ClientError> {
        self.mapbox_access_token
            .as_deref()
            .map(MapboxGeocoder::new)
            .ok_or(ClientError::Config("MAPBOX_ACCESS_TOKEN"))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
