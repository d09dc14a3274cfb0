use serde::Deserialize;
use serde_json::Value;

use crate::cases::{coin_name, coin_rank, coin_symbol};
use crate::client::{ApiClient, ListingsQuery};
use crate::error::{AppError, Result};
use crate::schema::validate_listing;

/// Envelope fields the `status` object should carry. Absence is warned, not
/// failed; sandbox responses are sometimes incomplete.
const STATUS_FIELDS: &[&str] = &["timestamp", "error_code", "error_message"];

/// Typed view of the response `status` envelope.
#[derive(Debug, Deserialize)]
struct ApiStatus {
    timestamp: Option<String>,
    error_code: Option<i64>,
    error_message: Option<String>,
}

/// Case 2: fetch ten records and validate the response envelope plus the
/// first record's schema. Hard case.
pub async fn run(client: &ApiClient) -> Result<()> {
    println!("\n🧪 Testing: Response Structure Validation");

    let body = client.listings(&ListingsQuery::new(1, 10, "USD")).await?;

    let data = body
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::message("response missing data array"))?;
    let status = body
        .get("status")
        .and_then(Value::as_object)
        .ok_or_else(|| AppError::message("response missing status object"))?;

    for field in STATUS_FIELDS {
        if !status.contains_key(*field) {
            log::warn!("missing status field: {field}");
        }
    }

    match serde_json::from_value::<ApiStatus>(Value::Object(status.clone())) {
        Ok(envelope) => {
            log::debug!(
                "status envelope: timestamp={:?} error_code={:?} error_message={:?}",
                envelope.timestamp,
                envelope.error_code,
                envelope.error_message
            );
            if let Some(code) = envelope.error_code {
                if code != 0 {
                    log::warn!("endpoint reported error code {code} alongside a 2xx response");
                }
            }
        }
        Err(err) => log::warn!("status envelope has unexpected shape: {err}"),
    }

    if let Some(first) = data.first() {
        validate_listing(first)?;
        println!("✅ Cryptocurrency object structure validated");
        println!(
            "✅ First coin: {} ({}) - Rank #{}",
            coin_name(first),
            coin_symbol(first),
            coin_rank(first)
        );
        print_usd_snapshot(first);
    }

    println!("✅ Response structure validation passed");
    Ok(())
}

fn print_usd_snapshot(record: &Value) {
    let Some(usd) = record.get("quote").and_then(|quote| quote.get("USD")) else {
        return;
    };
    println!("✅ USD Price: ${}", display_number(usd.get("price")));
    println!("✅ Market Cap: ${}", display_number(usd.get("market_cap")));
    println!(
        "✅ 24h Change: {}%",
        display_number(usd.get("percent_change_24h"))
    );
}

fn display_number(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_f64)
        .map_or_else(|| "N/A".to_string(), |number| number.to_string())
}
