//! Weather lookup by city name or by the browser's coordinates.

use leptos::prelude::*;

use super::settle;
use crate::app::Services;
use crate::error::ClientError;
use crate::net::weather::{WeatherApi, WeatherReport};

#[derive(Clone, Debug, Default)]
pub struct WeatherPage {
    pub city: String,
    pub report: Option<WeatherReport>,
    pub loading: bool,
    pub error: Option<String>,
}

impl WeatherPage {
    /// # Errors
    ///
    /// Returns the service error, mirrored into `error`.
    pub async fn search_city(&mut self, weather: &dyn WeatherApi) -> Result<WeatherReport, ClientError> {
        self.loading = true;
        let result = weather.current_by_city(&self.city).await;
        self.finish(result)
    }

    /// Look up conditions for a geolocation fix and adopt its city name.
    ///
    /// # Errors
    ///
    /// Returns the service error, mirrored into `error`.
    pub async fn locate(&mut self, weather: &dyn WeatherApi, lat: f64, lon: f64) -> Result<WeatherReport, ClientError> {
        self.loading = true;
        let result = weather.current_by_coords(lat, lon).await;
        if let Ok(report) = &result {
            self.city.clone_from(&report.city);
        }
        self.finish(result)
    }

    fn finish(&mut self, result: Result<WeatherReport, ClientError>) -> Result<WeatherReport, ClientError> {
        self.loading = false;
        self.report = result.as_ref().ok().cloned();
        settle(&mut self.error, result)
    }

    /// Temperature line, e.g. `18.4 °C (feels like 17.9 °C)`.
    #[must_use]
    pub fn temperature_label(&self) -> Option<String> {
        self.report
            .as_ref()
            .map(|r| format!("{:.1} °C (feels like {:.1} °C)", r.temperature_c, r.feels_like_c))
    }
}

#[component]
pub fn WeatherView() -> impl IntoView {
    let services = expect_context::<Services>();
    let page = RwSignal::new(WeatherPage::default());

    let search_services = services.clone();
    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if page.with_untracked(|p| p.loading) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let weather = search_services.config.weather();
            leptos::task::spawn_local(async move {
                let mut next = page.get_untracked();
                page.update(|p| p.loading = true);
                match weather {
                    Ok(weather) => {
                        let _ = next.search_city(&weather).await;
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
            let _ = &search_services;
        }
    };

    let on_locate = move |_| {
        if page.with_untracked(|p| p.loading) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let weather = services.config.weather();
            leptos::task::spawn_local(async move {
                let mut next = page.get_untracked();
                page.update(|p| p.loading = true);
                let fix = crate::util::browser::current_position().await;
                match (weather, fix) {
                    (Ok(weather), Ok((lat, lon))) => {
                        let _ = next.locate(&weather, lat, lon).await;
                    }
                    (Err(e), _) => {
                        let _ = settle(&mut next.error, Err::<(), _>(e));
                    }
                    (_, Err(message)) => {
                        let _ = settle(&mut next.error, Err::<(), _>(ClientError::Validation(message)));
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
            <h1>"Weather"</h1>
            <form class="form" on:submit=on_search>
                <input
                    type="text"
                    placeholder="City"
                    prop:value=move || page.with(|p| p.city.clone())
                    on:input=move |ev| page.update(|p| p.city = event_target_value(&ev))
                />
                <button type="submit" disabled=move || page.with(|p| p.loading)>"Search"</button>
                <button type="button" on:click=on_locate disabled=move || page.with(|p| p.loading)>
                    "Use my location"
                </button>
            </form>
            {move || {
                page.with(|p| {
                    p.report.clone().map(|report| {
                        let place = match &report.country {
                            Some(country) => format!("{}, {country}", report.city),
                            None => report.city.clone(),
                        };
                        view! {
                            <article>
                                <h2>{place}</h2>
                                <p>{p.temperature_label()}</p>
                                <p>{format!("Humidity: {}%", report.humidity)}</p>
                                <p>{report.description.clone()}</p>
                                {report.icon_url.clone().map(|src| view! { <img src=src alt=report.description.clone()/> })}
                            </article>
                        }
                    })
                })
            }}
            <p class="message message--error">{move || page.with(|p| p.error.clone())}</p>
        </section>
    }
}

#[cfg(test)]
#[path = "weather_test.rs"]
mod weather_test;
