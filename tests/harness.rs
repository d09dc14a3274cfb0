use std::thread;

use serde_json::{json, Value};
use tiny_http::{Header, Response, Server};

use cmc_conformance::cases::Case;
use cmc_conformance::client::ApiClient;
use cmc_conformance::config::HarnessConfig;
use cmc_conformance::runner;

const TEST_API_KEY: &str = "test-key";

/// Build one fully valid listing record.
fn listing(id: i64, rank: i64) -> Value {
    json!({
        "id": id,
        "name": format!("Coin {id}"),
        "symbol": format!("C{id}"),
        "slug": format!("coin-{id}"),
        "cmc_rank": rank,
        "num_market_pairs": 100,
        "circulating_supply": 1_000_000.0,
        "total_supply": 1_000_000.0,
        "max_supply": null,
        "date_added": "2020-01-01T00:00:00.000Z",
        "platform": null,
        "tags": ["fixture"],
        "quote": {
            "USD": {
                "price": 10.0 + rank as f64,
                "volume_24h": 1_000.0,
                "percent_change_1h": 0.1,
                "percent_change_24h": 1.0,
                "percent_change_7d": -2.0,
                "percent_change_30d": 4.0,
                "percent_change_60d": 5.0,
                "percent_change_90d": 6.0,
                "market_cap": 123_456.0,
                "last_updated": "2024-01-01T00:00:00.000Z"
            }
        }
    })
}

fn envelope(records: Vec<Value>) -> Value {
    json!({
        "data": records,
        "status": {
            "timestamp": "2024-01-01T00:00:00.000Z",
            "error_code": 0,
            "error_message": null
        }
    })
}

fn json_header() -> Header {
    Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
        .expect("static header must parse")
}

fn api_key_of(request: &tiny_http::Request) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|header| header.field.equiv("X-CMC_PRO_API_KEY"))
        .map(|header| header.value.as_str().to_string())
}

/// Serve the given body to every authorized request; reject bad credentials
/// with 401. Returns the base URL. The server thread lives for the rest of
/// the test process.
fn spawn_fixture(body: Value) -> String {
    spawn_with_handler(move |request| {
        if api_key_of(request).as_deref() == Some(TEST_API_KEY) {
            Response::from_string(body.to_string())
                .with_header(json_header())
                .with_status_code(200)
        } else {
            Response::from_string(r#"{"status":{"error_code":1001}}"#)
                .with_header(json_header())
                .with_status_code(401)
        }
    })
}

fn spawn_with_handler<F>(handler: F) -> String
where
    F: Fn(&tiny_http::Request) -> Response<std::io::Cursor<Vec<u8>>> + Send + 'static,
{
    let server = Server::http("127.0.0.1:0").expect("bind fixture server");
    let addr = server
        .server_addr()
        .to_ip()
        .expect("fixture server has an IP listen address");
    let base_url = format!("http://{addr}");

    thread::spawn(move || {
        for request in server.incoming_requests() {
            let response = handler(&request);
            let _ = request.respond(response);
        }
    });

    base_url
}

fn client_for(base_url: &str) -> ApiClient {
    let mut config = HarnessConfig::with_key(base_url, TEST_API_KEY);
    config.probe_timeout = std::time::Duration::from_secs(2);
    ApiClient::new(config)
}

#[tokio::test]
async fn full_suite_passes_against_small_valid_fixture() {
    let records = (1..=5).map(|id| listing(id, id)).collect();
    let base_url = spawn_fixture(envelope(records));
    let client = client_for(&base_url);

    let report = runner::run_all(&client).await;

    assert_eq!(report.outcomes.len(), 7);
    assert_eq!(report.passed, 7, "unexpected failures: {:?}", report.outcomes);
    assert_eq!(report.failed, 0);
    assert_eq!(report.success_rate(), 100.0);
    assert_eq!(report.exit_code(), 0);
}

#[tokio::test]
async fn missing_rank_fails_exactly_the_schema_sensitive_cases() {
    let mut records: Vec<Value> = (1..=5).map(|id| listing(id, id)).collect();
    for record in &mut records {
        record.as_object_mut().expect("record object").remove("cmc_rank");
    }
    let base_url = spawn_fixture(envelope(records));
    let client = client_for(&base_url);

    let report = runner::run_all(&client).await;

    assert_eq!(report.failed, 2);
    assert_eq!(report.exit_code(), 1);

    let failed: Vec<&str> = report
        .outcomes
        .iter()
        .filter(|outcome| !outcome.passed)
        .map(|outcome| outcome.name)
        .collect();
    assert_eq!(
        failed,
        vec!["Response Structure Validation", "Maximum Limit Endpoint"]
    );

    for outcome in report.outcomes.iter().filter(|outcome| !outcome.passed) {
        let detail = outcome.detail.as_deref().unwrap_or_default();
        assert!(detail.contains("cmc_rank"), "detail should name the field: {detail}");
    }
}

#[tokio::test]
async fn server_error_fails_basic_but_runner_continues() {
    let base_url = spawn_with_handler(|_request| {
        Response::from_string("internal error")
            .with_header(json_header())
            .with_status_code(500)
    });
    let client = client_for(&base_url);

    let report = runner::run_all(&client).await;

    // Every case still ran despite the first one failing.
    assert_eq!(report.outcomes.len(), 7);

    let basic = &report.outcomes[0];
    assert_eq!(basic.name, "Basic Endpoint Call");
    assert!(!basic.passed);
    assert!(basic.detail.as_deref().unwrap_or_default().contains("500"));

    // The error-handling case treats rejections as the expected outcome.
    let errors = report
        .outcomes
        .iter()
        .find(|outcome| outcome.name == "Error Handling")
        .expect("error handling case ran");
    assert!(errors.passed);

    assert_eq!(report.exit_code(), 1);
}

#[tokio::test]
async fn invalid_credential_rejection_counts_as_success() {
    let records = (1..=3).map(|id| listing(id, id)).collect();
    let base_url = spawn_fixture(envelope(records));
    let client = client_for(&base_url);

    let report = runner::run_cases(&client, &[Case::ErrorHandling]).await;

    assert_eq!(report.passed, 1);
    assert_eq!(report.failed, 0);
    assert_eq!(report.exit_code(), 0);
}

#[tokio::test]
async fn empty_body_fails_basic_call() {
    let base_url = spawn_with_handler(|_request| {
        Response::from_string("")
            .with_header(json_header())
            .with_status_code(200)
    });
    let client = client_for(&base_url);

    let report = runner::run_cases(&client, &[Case::Basic]).await;

    assert_eq!(report.failed, 1);
    let detail = report.outcomes[0].detail.as_deref().unwrap_or_default();
    assert!(detail.contains("empty"), "unexpected detail: {detail}");
}

#[tokio::test]
async fn low_volume_fixture_passes_max_limit() {
    // A single record is still a non-empty page; the harness tolerates
    // sandbox volume shortfalls.
    let base_url = spawn_fixture(envelope(vec![listing(1, 1)]));
    let client = client_for(&base_url);

    let report = runner::run_cases(&client, &[Case::MaxLimit]).await;

    assert_eq!(report.passed, 1);
}
