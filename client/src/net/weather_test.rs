use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn melbourne() -> serde_json::Value {
    serde_json::json!({
        "name": "Melbourne",
        "sys": {"country": "AU"},
        "main": {"temp": 18.4, "feels_like": 17.9, "humidity": 64},
        "weather": [{"description": "scattered clouds", "icon": "03d"}]
    })
}

#[tokio::test]
async fn city_lookup_sends_key_and_metric_units() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Melbourne"))
        .and(query_param("appid", "k"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(melbourne()))
        .expect(1)
        .mount(&server)
        .await;

    let report = OpenWeatherClient::with_base_url(server.uri(), "k")
        .current_by_city("  Melbourne ")
        .await
        .unwrap();
    assert_eq!(report.city, "Melbourne");
    assert_eq!(report.country.as_deref(), Some("AU"));
    assert_eq!(report.humidity, 64);
    assert!((report.temperature_c - 18.4).abs() < f64::EPSILON);
    assert_eq!(report.description, "scattered clouds");
    assert_eq!(report.icon_url.as_deref(), Some("https://openweathermap.org/img/wn/03d@2x.png"));
}

#[tokio::test]
async fn coords_lookup_uses_lat_lon() {
    let server = MockServer::start().await;
    Mock::given(path("/weather"))
        .and(query_param("lat", "-37.8136"))
        .and(query_param("lon", "144.9631"))
        .respond_with(ResponseTemplate::new(200).set_body_json(melbourne()))
        .expect(1)
        .mount(&server)
        .await;

    let report = OpenWeatherClient::with_base_url(server.uri(), "k")
        .current_by_coords(-37.8136, 144.9631)
        .await
        .unwrap();
    assert_eq!(report.city, "Melbourne");
}

#[tokio::test]
async fn upstream_error_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(path("/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({"cod": "404", "message": "city not found"})))
        .mount(&server)
        .await;

    let err = OpenWeatherClient::with_base_url(server.uri(), "k")
        .current_by_city("Atlantis")
        .await
        .unwrap_err();
    assert_eq!(err, ClientError::Status { status: 404, message: "city not found".into() });
}

#[tokio::test]
async fn blank_city_is_rejected_before_request() {
    let client = OpenWeatherClient::with_base_url("http://127.0.0.1:9", "k");
    assert!(matches!(client.current_by_city("   ").await, Err(ClientError::Validation(_))));
    assert!(matches!(client.current_by_coords(91.0, 0.0).await, Err(ClientError::Validation(_))));
}

#[test]
fn missing_condition_leaves_icon_empty() {
    let resp: OwmResponse = serde_json::from_value(serde_json::json!({
        "name": "Nowhere",
        "main": {"temp": 0.0, "feels_like": -2.5, "humidity": 100}
    }))
    .unwrap();
    let report = WeatherReport::from(resp);
    assert!(report.icon_url.is_none());
    assert!(report.country.is_none());
    assert_eq!(report.description, "");
}
