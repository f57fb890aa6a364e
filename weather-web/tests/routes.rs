//! Router tests: real OpenWeatherClient, stubbed upstream.

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;
use weather_core::OpenWeatherClient;
use weather_web::{AppState, build_router};
use wiremock::matchers::{method, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn reply(name: &str, temp: f64, humidity: u8, wind: f64, sunset: i64) -> Value {
    json!({
        "cod": 200,
        "name": name,
        "weather": [{"description": "clear sky"}],
        "main": {"temp": temp, "temp_min": temp - 1.0, "temp_max": temp + 1.0, "humidity": humidity},
        "wind": {"speed": wind},
        "sys": {"sunrise": sunset - 36_000, "sunset": sunset}
    })
}

fn app(server: &MockServer, strict_comparison: bool) -> Router {
    let client =
        OpenWeatherClient::new("TEST_KEY".to_string(), server.uri(), Duration::from_secs(5))
            .unwrap();
    build_router(AppState::new(Arc::new(client), strict_comparison))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let res = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = res.status();
    let body = to_bytes(res.into_body(), 1024 * 1024).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn home_renders_forms() {
    let server = MockServer::start().await;

    let res = app(&server, false)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let content_type = res.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let body = to_bytes(res.into_body(), 1024 * 1024).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains(r#"action="/results""#));
    assert!(text.contains(r#"action="/comparison_results""#));
}

#[tokio::test]
async fn results_for_london_in_metric() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("q", "London"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "TEST_KEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cod": 200,
            "name": "London",
            "weather": [{"description": "clear sky"}],
            "main": {"temp": 15, "humidity": 60},
            "wind": {"speed": 3.1},
            "sys": {"sunrise": 1_700_000_000, "sunset": 1_700_030_000}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get(app(&server, false), "/results?city=London&units=metric").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Weather in London"));
    assert!(body.contains("clear sky"));
    assert!(body.contains("Temperature: 15&deg;C"));
    assert!(body.contains("Humidity: 60%"));
    assert!(body.contains("Wind speed: 3.1 m/s"));
}

#[tokio::test]
async fn results_defaults_to_empty_city_and_imperial() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("q", ""))
        .and(query_param("units", "imperial"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"cod": "400", "message": "Nothing to geocode"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get(app(&server, false), "/results").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("City not found or API error."));
}

#[tokio::test]
async fn unknown_city_gets_the_error_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"cod": "404", "message": "city not found"})),
        )
        .mount(&server)
        .await;

    let (status, body) = get(app(&server, false), "/results?city=Atlantis").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"class="error""#));
    assert!(body.contains("City not found or API error."));
}

#[tokio::test]
async fn malformed_success_reply_is_a_500() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"cod": 200, "name": "London"})))
        .mount(&server)
        .await;

    let (status, body) = get(app(&server, false), "/results?city=London").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Internal Server Error");
}

#[tokio::test]
async fn comparison_renders_deltas() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("q", "Oslo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("Oslo", 20.0, 80, 5.0, 1_700_030_000)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("q", "Rome"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("Rome", 25.0, 55, 2.0, 1_700_037_200)))
        .mount(&server)
        .await;

    let (status, body) =
        get(app(&server, false), "/comparison_results?city1=Oslo&city2=Rome&units=metric").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Oslo is 5&deg;C colder than Rome."));
    assert!(body.contains("Oslo has 25% greater humidity than Rome."));
    assert!(body.contains("3 m/s greater than Rome."));
    assert!(body.contains("sunset is 2.00 hours earlier than in Rome."));
}

#[tokio::test]
async fn comparison_without_units_leaves_them_off_upstream() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param_is_missing("units"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("Anywhere", 290.0, 50, 1.0, 1_700_030_000)))
        .expect(2)
        .mount(&server)
        .await;

    let (status, body) = get(app(&server, false), "/comparison_results?city1=A&city2=B").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("A is 0&deg;K colder than B."));
}

#[tokio::test]
async fn comparison_with_unknown_city_is_a_500_by_default() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"cod": "404", "message": "city not found"})),
        )
        .mount(&server)
        .await;

    let (status, _) =
        get(app(&server, false), "/comparison_results?city1=Atlantis&city2=Oslo&units=metric").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn comparison_with_unknown_city_shows_error_page_when_strict() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"cod": "404", "message": "city not found"})),
        )
        .mount(&server)
        .await;

    let (status, body) =
        get(app(&server, true), "/comparison_results?city1=Atlantis&city2=Oslo&units=metric").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("City not found or API error."));
}

#[tokio::test]
async fn upstream_gone_is_a_500() {
    let server = MockServer::start().await;
    let router = app(&server, false);
    drop(server);

    let (status, _) = get(router, "/results?city=London").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
