//! Place search for the map page.

use leptos::prelude::*;

use super::settle;
use crate::app::Services;
use crate::error::ClientError;
use crate::net::geocode::{Geocoder, Place};

/// Initial map center, `[lon, lat]` (Melbourne CBD).
pub const DEFAULT_CENTER: [f64; 2] = [144.9631, -37.8136];
pub const DEFAULT_ZOOM: f64 = 12.0;
pub const NO_RESULTS_MESSAGE: &str = "No results found";
pub const STATIC_MAP_URL: &str = "https://api.mapbox.com/styles/v1/mapbox/streets-v12/static";

/// Mapbox Static Images URL for a `[lon, lat]` center with a pin on it.
#[must_use]
pub fn static_map_url(center: [f64; 2], zoom: f64, access_token: &str) -> String {
    let [lon, lat] = center;
    format!("{STATIC_MAP_URL}/pin-s+2f6f4f({lon},{lat})/{lon},{lat},{zoom}/640x400?access_token={access_token}")
}

#[derive(Clone, Debug)]
pub struct MapPage {
    pub query: String,
    pub results: Vec<Place>,
    pub selected: Option<usize>,
    pub center: [f64; 2],
    pub zoom: f64,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for MapPage {
    fn default() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            selected: None,
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            loading: false,
            error: None,
        }
    }
}

impl MapPage {
    /// Search and fly to the best match. An empty result set is an error so
    /// the page can show [`NO_RESULTS_MESSAGE`].
    ///
    /// # Errors
    ///
    /// Returns the geocoder error, or a validation error when nothing matched.
    pub async fn search(&mut self, geocoder: &dyn Geocoder) -> Result<usize, ClientError> {
        self.loading = true;
        let result = geocoder.search(&self.query).await;
        self.loading = false;
        let result = result.and_then(|places| {
            if places.is_empty() {
                return Err(ClientError::Validation(NO_RESULTS_MESSAGE.to_owned()));
            }
            self.results = places;
            self.select(0);
            Ok(self.results.len())
        });
        if result.is_err() {
            self.results.clear();
            self.selected = None;
        }
        settle(&mut self.error, result)
    }

    /// Center the map on one of the current results.
    pub fn select(&mut self, index: usize) {
        if let Some(place) = self.results.get(index) {
            self.center = [place.longitude, place.latitude];
            self.selected = Some(index);
        }
    }
}

#[component]
pub fn MapView() -> impl IntoView {
    let services = expect_context::<Services>();
    let page = RwSignal::new(MapPage::default());
    let token = services.config.mapbox_access_token.clone();

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if page.with_untracked(|p| p.loading) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let geocoder = services.config.geocoder();
            leptos::task::spawn_local(async move {
                let mut next = page.get_untracked();
                page.update(|p| p.loading = true);
                match geocoder {
                    Ok(geocoder) => {
                        let _ = next.search(&geocoder).await;
                    }
                    Err(e) => {
                        let _ = settle(&mut next.error, Err::<(), _>(e));
                    }
                }
                page.set(next);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &services;
        }
    };

    view! {
        <section>
            <h1>"Map"</h1>
            <form class="form" on:submit=on_search>
                <input
                    type="text"
                    placeholder="Search for a place"
                    prop:value=move || page.with(|p| p.query.clone())
                    on:input=move |ev| page.update(|p| p.query = event_target_value(&ev))
                />
                <button type="submit" disabled=move || page.with(|p| p.loading)>"Search"</button>
            </form>
            {move || {
                let token = token.clone()?;
                let src = page.with(|p| static_map_url(p.center, p.zoom, &token));
                Some(view! { <img class="map__image" src=src alt="Map"/> })
            }}
            <ul>
                {move || {
                    page.with(|p| {
                        p.results
                            .iter()
                            .enumerate()
                            .map(|(index, place)| {
                                let name = place.name.clone();
                                let selected = p.selected == Some(index);
                                view! {
                                    <li>
                                        <button
                                            type="button"
                                            class:selected=selected
                                            on:click=move |_| page.update(|p| p.select(index))
                                        >
                                            {name}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    })
                }}
            </ul>
            <p class="message message--error">{move || page.with(|p| p.error.clone())}</p>
        </section>
    }
}

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;
