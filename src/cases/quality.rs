use serde_json::Value;

use crate::cases::{coin_name, data_array};
use crate::client::{ApiClient, ListingsQuery};
use crate::error::Result;

/// Rank deviations beyond this are reported; smaller gaps are tolerated
/// because sandbox data rarely carries proper sequential rankings.
const RANK_TOLERANCE: i64 = 1000;

/// How many individual data issues get listed before eliding the rest.
const MAX_LISTED_ISSUES: usize = 5;

/// Case 7: sample fifty records and summarize price completeness and rank
/// consistency. Informational only — observations never fail the case.
pub async fn run(client: &ApiClient) -> Result<()> {
    println!("\n🧪 Testing: Data Quality and Consistency");

    let body = client.listings(&ListingsQuery::new(1, 50, "USD")).await?;
    let data = data_array(&body)?;

    let mut valid_prices = 0usize;
    let mut issues: Vec<String> = Vec::new();

    for (index, record) in data.iter().enumerate() {
        match record.get("quote").and_then(|quote| quote.get("USD")) {
            Some(usd) => {
                let price = usd.get("price").and_then(Value::as_f64);
                match price {
                    Some(price) if price.is_finite() && price > 0.0 => valid_prices += 1,
                    _ => issues.push(format!(
                        "{}: Invalid price {}",
                        coin_name(record),
                        usd.get("price").unwrap_or(&Value::Null)
                    )),
                }
            }
            None => issues.push(format!("{}: Missing USD quote", coin_name(record))),
        }

        check_rank(record, index);
    }

    let total = data.len();
    println!("✅ Data quality summary:");
    println!("   Valid price data: {valid_prices}/{total} coins");
    if total > 0 {
        println!(
            "   Data completeness: {:.1}%",
            valid_prices as f64 / total as f64 * 100.0
        );
    }

    if issues.is_empty() {
        println!("   ✅ No data quality issues detected");
    } else {
        log::warn!("data issues found:");
        for issue in issues.iter().take(MAX_LISTED_ISSUES) {
            log::warn!("  - {issue}");
        }
        if issues.len() > MAX_LISTED_ISSUES {
            log::warn!("  - ... and {} more issues", issues.len() - MAX_LISTED_ISSUES);
        }
    }

    println!("✅ Data quality and consistency test completed");
    Ok(())
}

/// Flag ranks that deviate from the record's position by more than the
/// tolerance. Positional index is zero-based; ranks are one-based.
fn check_rank(record: &Value, index: usize) {
    let Some(rank) = record.get("cmc_rank").and_then(Value::as_i64) else {
        return;
    };
    let expected = index as i64 + 1;
    if rank != expected && (rank < expected || rank > expected + RANK_TOLERANCE) {
        log::warn!(
            "ranking inconsistency: {} should be #{expected}, got #{rank}",
            coin_name(record)
        );
    }
}
