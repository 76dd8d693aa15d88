use std::time::Duration;

use axum::{Json, Router, extract::Path, http::StatusCode, routing::get};
use common::ApiClient;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::transport::HttpTransport;

/// First day of the range for which the fake backend has no sightings.
pub const EMPTY_RANGE_START: &str = "2020-01-01";

/// Initialize tracing for tests with output to STDERR.
///
/// The log level comes from RUST_LOG, defaulting to WARN.
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}

pub fn prediction_fixture() -> Value {
    json!({
        "buckets": [
            {
                "time_bucket": "0-6h",
                "forecast_start_time": "2025-08-22T03:00:00Z",
                "forecast_end_time": "2025-08-22T09:00:00Z",
                "zone_predictions": [
                    {"zone_number": 1, "zone": "Haro Strait", "probability": 0.62, "is_top_5": true},
                    {"zone_number": 2, "zone": "Boundary Pass", "probability": 0.2, "is_top_5": false}
                ]
            },
            {
                "time_bucket": "6-12h",
                "forecast_start_time": "2025-08-22T09:00:00Z",
                "forecast_end_time": "2025-08-22T15:00:00Z",
                "zone_predictions": [
                    {"zone_number": 2, "zone": "Boundary Pass", "probability": 0.45, "is_top_5": true},
                    {"zone_number": 1, "zone": "Haro Strait", "probability": 0.1, "is_top_5": false},
                    {"zone_number": 4, "zone": null, "probability": null, "is_top_5": true}
                ]
            }
        ]
    })
}

async fn recent_predictions() -> Json<Value> {
    Json(prediction_fixture())
}

async fn sightings_by_zone(Path((start, _end)): Path<(String, String)>) -> Json<Value> {
    if start == EMPTY_RANGE_START {
        return Json(json!([]));
    }
    Json(json!([{"zone": 1, "count": 5}, {"zone": 2, "count": 3}]))
}

async fn sightings_by_hour(Path((start, _end)): Path<(String, String)>) -> Json<Value> {
    if start == EMPTY_RANGE_START {
        return Json(json!([]));
    }
    Json(json!([{"hour": 8, "count": 3}, {"hour": 17, "count": 1}]))
}

async fn sightings(Path((start, _end)): Path<(String, String)>) -> Json<Value> {
    if start == EMPTY_RANGE_START {
        return Json(json!([]));
    }
    Json(json!([
        {"id": 1, "zone": 3, "time": "2025-06-02T10:00:00Z", "count": 2, "direction": "northbound"},
        {"id": 2, "ZoneNumber": 5, "time": "2025-06-20T08:30:00Z", "count": 0, "direction": "",
         "timeSinceLastSighting": "4 days"},
        {"id": 3, "zone": 4, "time": "sometime in June"}
    ]))
}

/// Backend serving the fixtures above.
pub fn fixture_router() -> Router {
    Router::new()
        .route("/api/predictions/recent/", get(recent_predictions))
        .route("/api/sightings/zones/:start/:end/", get(sightings_by_zone))
        .route("/api/sightings/byhour/:start/:end/", get(sightings_by_hour))
        .route("/api/sightings/:start/:end/", get(sightings))
}

/// Backend answering every request with `status` and `body`.
pub fn failing_router(status: StatusCode, body: &'static str) -> Router {
    Router::new().fallback(move || async move { (status, body) })
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let address = listener.local_addr().expect("Listener has no local address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test backend stopped");
    });

    format!("http://{}", address)
}

pub fn client(base_url: &str) -> ApiClient<HttpTransport> {
    let transport = HttpTransport::new(Duration::from_secs(5)).expect("Failed to build HTTP client");
    ApiClient::new(transport, base_url)
}
