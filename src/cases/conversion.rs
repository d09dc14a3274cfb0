use serde_json::Value;

use crate::cases::{coin_name, data_array};
use crate::client::{ApiClient, ListingsQuery};
use crate::error::{AppError, Result};

/// Currencies exercised by the conversion case, requested one at a time.
const CURRENCIES: &[&str] = &["USD", "EUR", "BTC", "ETH"];

/// Case 4: request a small page converted into each currency and check the
/// first record's price. A missing quote for a currency is only a warning;
/// a present but non-numeric or non-finite price fails the case.
pub async fn run(client: &ApiClient) -> Result<()> {
    println!("\n🧪 Testing: Currency Conversion");

    for &currency in CURRENCIES {
        println!("\n💱 Testing conversion to: {currency}");

        let body = client.listings(&ListingsQuery::new(1, 5, currency)).await?;
        let data = data_array(&body)?;

        let Some(first) = data.first() else {
            log::warn!("no records returned for {currency} conversion");
            continue;
        };

        let Some(quote) = first.get("quote").and_then(|quote| quote.get(currency)) else {
            log::warn!("no {currency} quote found for {}", coin_name(first));
            continue;
        };

        let price = quote.get("price").and_then(Value::as_f64);
        match price {
            Some(price) if price.is_finite() => {
                println!("✅ {}: {price} {currency}", coin_name(first));
            }
            _ => {
                return Err(AppError::schema(
                    format!("quote.{currency}.price"),
                    format!("invalid price: {}", quote.get("price").unwrap_or(&Value::Null)),
                ));
            }
        }

        if let Some(market_cap) = quote.get("market_cap").and_then(Value::as_f64) {
            println!("   Market Cap: {market_cap} {currency}");
        }
        if let Some(change) = quote.get("percent_change_24h").and_then(Value::as_f64) {
            println!("   24h Change: {change}%");
        }
    }

    println!("✅ Currency conversion test passed");
    println!("ℹ️  Note: Sandbox may return mock/synthetic data");
    Ok(())
}
