//! Forward geocoding through the Mapbox places API.

use async_trait::async_trait;
use serde::Deserialize;

use super::http::{decode, transport_error};
use crate::error::ClientError;

pub const DEFAULT_MAPBOX_URL: &str = "https://api.mapbox.com";
const RESULT_LIMIT: &str = "5";

/// A geocoded place. Coordinates follow Mapbox's `[lon, lat]` order.
#[derive(Clone, Debug, PartialEq)]
pub struct Place {
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
}

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Places matching `query`, best match first.
    async fn search(&self, query: &str) -> Result<Vec<Place>, ClientError>;
}

#[derive(Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    place_name: String,
    center: [f64; 2],
}

/// reqwest-backed [`Geocoder`].
#[derive(Clone, Debug)]
pub struct MapboxGeocoder {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl MapboxGeocoder {
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_MAPBOX_URL, access_token)
    }

    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.into(), access_token: access_token.into() }
    }

    /// `{base}/geocoding/v5/mapbox.places/{query}.json`, with the query as one
    /// percent-encoded segment.
    fn places_url(&self, query: &str) -> Result<reqwest::Url, ClientError> {
        let mut url = reqwest::Url::parse(&self.base_url).map_err(|e| ClientError::Url(e.to_string()))?;
        let file = format!("{query}.json");
        url.path_segments_mut()
            .map_err(|()| ClientError::Url(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(["geocoding", "v5", "mapbox.places", file.as_str()]);
        Ok(url)
    }
}

#[async_trait]
impl Geocoder for MapboxGeocoder {
    async fn search(&self, query: &str) -> Result<Vec<Place>, ClientError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ClientError::Validation("Enter a place to search for.".into()));
        }
        let resp = self
            .http
            .get(self.places_url(query)?)
            .query(&[("access_token", self.access_token.as_str()), ("limit", RESULT_LIMIT)])
            .send()
            .await
            .map_err(transport_error)?;
        let body: FeatureCollection = decode(resp).await?;
        Ok(body
            .features
            .into_iter()
            .map(|f| Place { name: f.place_name, longitude: f.center[0], latitude: f.center[1] })
            .collect())
    }
}

#[cfg(test)]
#[path = "geocode_test.rs"]
mod geocode_test;
