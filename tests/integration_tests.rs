//! Integration tests for the Omen library and CLI

use std::path::Path;
use std::process::{Command, Output};
use std::sync::Arc;

use chrono::Utc;
use omen::config::WeatherConfig;
use omen::messages::haikus;
use omen::store::PLACEHOLDER_HAIKU;
use omen::{
    Condition, FjallStore, MemoryStore, MessageSelector, Observation, OmenError, OmenService,
    OpenMeteoClient, SharedStore, WeatherClassifier, WidgetProvider, classify, select_message,
};
use rstest::rstest;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const FORECAST_BODY: &str = r#"{
    "latitude": 52.52,
    "longitude": 13.42,
    "current": {
        "time": "2025-03-16T12:00",
        "interval": 900,
        "temperature_2m": 21.0,
        "relative_humidity_2m": 48,
        "wind_speed_10m": 2.0,
        "precipitation": 0.0,
        "snowfall": 0.0
    }
}"#;

/// Serve a single canned HTTP response and return the base URL
async fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    format!("http://{addr}/v1")
}

fn weather_config(base_url: String) -> WeatherConfig {
    WeatherConfig {
        base_url,
        timeout_seconds: 5,
        max_retries: 0,
    }
}

fn omen(args: &[&str], store: &Path) -> Output {
    omen_against(args, store, "http://127.0.0.1:9")
}

fn omen_against(args: &[&str], store: &Path, base_url: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_omen"))
        .args(args)
        .env("OMEN_CONFIG", store.join("missing.toml"))
        .env("OMEN_STORE__LOCATION", store.join("shared"))
        .env("OMEN_WEATHER__BASE_URL", base_url)
        .env("OMEN_WEATHER__MAX_RETRIES", "0")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute omen")
}

#[rstest]
#[case::thunder(Observation::new(75.0, 60, 10.0, 20.0, 0.0, Some(80)).unwrap(), Condition::Thunderstorm)]
#[case::fog(Observation::new(45.0, 97, 1.0, 0.0, 0.0, None).unwrap(), Condition::Foggy)]
#[case::polar(Observation::new(-12.0, 40, 3.0, 0.0, 0.0, None).unwrap(), Condition::Polar)]
fn test_selected_haiku_belongs_to_condition(
    #[case] observation: Observation,
    #[case] expected: Condition,
) {
    let condition = classify(&observation);
    assert_eq!(condition, expected);

    let haiku = select_message(condition);
    assert!(haikus::builtin(condition).contains(&haiku.as_str()));
}

#[tokio::test]
async fn test_refresh_against_local_server() {
    let base_url = serve_once("200 OK", FORECAST_BODY).await;
    let store = Arc::new(MemoryStore::new());
    let service = OmenService::new(
        OpenMeteoClient::new(&weather_config(base_url)).unwrap(),
        WeatherClassifier::new(),
        MessageSelector::default(),
        Arc::clone(&store),
    );

    let reading = service.refresh(52.52, 13.42).await.unwrap();
    assert_eq!(reading.condition, Condition::Balmy);
    assert!((reading.observation.temperature_f() - 69.8).abs() < 1e-9);
    assert!((reading.observation.wind_speed_mph() - 4.474).abs() < 1e-9);

    // The widget side sees what the pipeline published
    let entry = WidgetProvider::new(store).snapshot(Utc::now()).await.unwrap();
    assert_eq!(entry.haiku, reading.haiku);
}

#[tokio::test]
async fn test_server_error_is_network_error() {
    let base_url = serve_once("503 Service Unavailable", "{}").await;
    let store = Arc::new(MemoryStore::new());
    let service = OmenService::new(
        OpenMeteoClient::new(&weather_config(base_url)).unwrap(),
        WeatherClassifier::new(),
        MessageSelector::default(),
        Arc::clone(&store),
    );

    let err = service.refresh(52.52, 13.42).await.unwrap_err();
    assert!(matches!(err, OmenError::Network { .. }), "{err}");
    assert!(err.haiku().starts_with("Silent connection"));
    assert_eq!(store.last_updated().await.unwrap(), None);
}

#[tokio::test]
async fn test_malformed_body_is_decoding_error() {
    let base_url = serve_once("200 OK", r#"{"current": {"temperature_2m": "warm"}}"#).await;
    let service = OmenService::new(
        OpenMeteoClient::new(&weather_config(base_url)).unwrap(),
        WeatherClassifier::new(),
        MessageSelector::default(),
        MemoryStore::new(),
    );

    let err = service.refresh(52.52, 13.42).await.unwrap_err();
    assert!(matches!(err, OmenError::Decoding { .. }), "{err}");
}

#[tokio::test]
async fn test_fjall_store_feeds_widget_timeline() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FjallStore::open(dir.path()).unwrap());
    omen::SharedWeatherState::new(Arc::clone(&store))
        .publish("snow on the\nquiet roof\nmelts")
        .await
        .unwrap();

    let timeline = WidgetProvider::new(store).timeline(Utc::now()).await.unwrap();
    assert_eq!(timeline.entries.len(), 6);
    assert!(
        timeline
            .entries
            .iter()
            .all(|entry| entry.haiku == "snow on the\nquiet roof\nmelts")
    );
}

#[test]
fn test_cli_help() {
    let dir = tempfile::tempdir().unwrap();
    let output = omen(&["--help"], dir.path());
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("haiku"));
    assert!(stdout.contains("fetch"));
    assert!(stdout.contains("widget"));
}

#[test]
fn test_cli_classify() {
    let dir = tempfile::tempdir().unwrap();
    let output = omen(
        &[
            "classify",
            "--temperature-c",
            "40",
            "--humidity",
            "30",
            "--wind-ms",
            "1",
        ],
        dir.path(),
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Hellscape"));
    assert!(stdout.contains("104°F"));
    assert!(!stdout.contains("Thunder"));
}

#[test]
fn test_cli_classify_rejects_bad_humidity() {
    let dir = tempfile::tempdir().unwrap();
    let output = omen(
        &[
            "classify",
            "--temperature-c",
            "10",
            "--humidity",
            "120",
            "--wind-ms",
            "1",
        ],
        dir.path(),
    );
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Path leads to nowhere"));
}

#[test]
fn test_cli_conditions_lists_every_condition() {
    let dir = tempfile::tempdir().unwrap();
    let output = omen(&["conditions"], dir.path());
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), Condition::ALL.len());
    assert!(stdout.contains("Partly Cloudy"));
}

#[test]
fn test_cli_widget_before_first_fetch() {
    let dir = tempfile::tempdir().unwrap();
    let output = omen(&["widget"], dir.path());
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(PLACEHOLDER_HAIKU));
}

#[test]
fn test_cli_fetch_offline_prints_error_haiku() {
    let dir = tempfile::tempdir().unwrap();
    let output = omen(
        &["fetch", "--latitude", "52.52", "--longitude", "-0.12"],
        dir.path(),
    );
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Silent connection"));

    // Nothing was published
    let output = omen(&["widget"], dir.path());
    assert!(String::from_utf8_lossy(&output.stdout).contains(PLACEHOLDER_HAIKU));
}

#[tokio::test]
async fn test_cli_widget_reads_what_fetch_published() {
    let base_url = serve_once("200 OK", FORECAST_BODY).await;
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().to_path_buf();

    let fetch = tokio::task::spawn_blocking(move || {
        omen_against(
            &["fetch", "--latitude", "52.52", "--longitude", "13.42"],
            &store,
            &base_url,
        )
    })
    .await
    .unwrap();
    assert!(
        fetch.status.success(),
        "{}",
        String::from_utf8_lossy(&fetch.stderr)
    );
    let haiku = String::from_utf8_lossy(&fetch.stdout).trim_end().to_string();
    assert!(haikus::builtin(Condition::Balmy).contains(&haiku.as_str()));

    // A separate process sees the published haiku, not the placeholder
    let widget = omen(&["widget"], dir.path());
    assert!(widget.status.success());
    let stdout = String::from_utf8_lossy(&widget.stdout);
    assert!(stdout.starts_with(&haiku));
    assert!(!stdout.contains(PLACEHOLDER_HAIKU));
}
