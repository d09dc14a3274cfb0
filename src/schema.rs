use serde_json::Value;

use crate::error::{AppError, Result};

/// Top-level keys every listing record must carry.
pub const REQUIRED_FIELDS: &[&str] = &[
    "id",
    "name",
    "symbol",
    "slug",
    "cmc_rank",
    "num_market_pairs",
    "circulating_supply",
    "total_supply",
    "max_supply",
    "date_added",
    "platform",
    "tags",
    "quote",
];

/// Top-level fields that must hold a finite number when present and non-null.
pub const NUMERIC_FIELDS: &[&str] = &[
    "id",
    "cmc_rank",
    "num_market_pairs",
    "circulating_supply",
    "total_supply",
    "max_supply",
];

/// USD quote fields that must hold a finite number when present and non-null.
pub const QUOTE_NUMERIC_FIELDS: &[&str] = &[
    "price",
    "volume_24h",
    "percent_change_1h",
    "percent_change_24h",
    "percent_change_7d",
    "percent_change_30d",
    "percent_change_60d",
    "percent_change_90d",
    "market_cap",
];

/// USD quote fields that must hold a string when present and non-null.
pub const QUOTE_STRING_FIELDS: &[&str] = &["last_updated"];

/// Validate one listing record against the fixed contract.
///
/// Pure and deterministic; stops at the first violation so the diagnostic
/// always names a single offending field. Checks run in a fixed order:
/// required-key presence, top-level numeric types, then the USD quote when
/// one exists.
pub fn validate_listing(record: &Value) -> Result<()> {
    let object = record
        .as_object()
        .ok_or_else(|| AppError::schema("<record>", "listing is not a JSON object"))?;

    for field in REQUIRED_FIELDS {
        if !object.contains_key(*field) {
            return Err(AppError::schema(*field, "missing required field"));
        }
    }

    for field in NUMERIC_FIELDS {
        if let Some(value) = object.get(*field) {
            check_numeric(field, value)?;
        }
    }

    if let Some(usd) = object.get("quote").and_then(|quote| quote.get("USD")) {
        for field in QUOTE_NUMERIC_FIELDS {
            if let Some(value) = usd.get(*field) {
                check_numeric(&format!("quote.USD.{field}"), value)?;
            }
        }
        for field in QUOTE_STRING_FIELDS {
            if let Some(value) = usd.get(*field) {
                if !value.is_null() && !value.is_string() {
                    return Err(AppError::schema(
                        format!("quote.USD.{field}"),
                        format!("expected string, got {value}"),
                    ));
                }
            }
        }
    }

    Ok(())
}

fn check_numeric(field: &str, value: &Value) -> Result<()> {
    if value.is_null() {
        return Ok(());
    }
    match value.as_f64() {
        Some(number) if number.is_finite() => Ok(()),
        Some(number) => Err(AppError::schema(
            field,
            format!("expected finite number, got {number}"),
        )),
        None => Err(AppError::schema(
            field,
            format!("expected number, got {value}"),
        )),
    }
}
