use serde_json::Value;

use crate::client::ApiClient;
use crate::error::{AppError, Result};

pub mod basic;
pub mod conversion;
pub mod errors;
pub mod max_limit;
pub mod performance;
pub mod quality;
pub mod structure;

/// The seven conformance checks, in the fixed order the suite runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Basic,
    Structure,
    MaxLimit,
    Conversion,
    ErrorHandling,
    Performance,
    DataQuality,
}

impl Case {
    /// Canonical suite order. One case's failure never reorders or skips
    /// the ones after it.
    pub const ORDERED: &'static [Case] = &[
        Case::Basic,
        Case::Structure,
        Case::MaxLimit,
        Case::Conversion,
        Case::ErrorHandling,
        Case::Performance,
        Case::DataQuality,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Case::Basic => "Basic Endpoint Call",
            Case::Structure => "Response Structure Validation",
            Case::MaxLimit => "Maximum Limit Endpoint",
            Case::Conversion => "Currency Conversion",
            Case::ErrorHandling => "Error Handling",
            Case::Performance => "Performance",
            Case::DataQuality => "Data Quality and Consistency",
        }
    }

    /// CLI slug for `--case`.
    pub fn slug(self) -> &'static str {
        match self {
            Case::Basic => "basic",
            Case::Structure => "structure",
            Case::MaxLimit => "max-limit",
            Case::Conversion => "conversion",
            Case::ErrorHandling => "errors",
            Case::Performance => "performance",
            Case::DataQuality => "quality",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Case> {
        Case::ORDERED
            .iter()
            .copied()
            .find(|case| case.slug() == slug)
    }

    pub async fn run(self, client: &ApiClient) -> Result<()> {
        match self {
            Case::Basic => basic::run(client).await,
            Case::Structure => structure::run(client).await,
            Case::MaxLimit => max_limit::run(client).await,
            Case::Conversion => conversion::run(client).await,
            Case::ErrorHandling => errors::run(client).await,
            Case::Performance => performance::run(client).await,
            Case::DataQuality => quality::run(client).await,
        }
    }
}

/// Pull the top-level `data` array out of a listings response body.
pub(crate) fn data_array(body: &Value) -> Result<&Vec<Value>> {
    body.get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::message("response missing data array"))
}

/// Best-effort display name for a listing record.
pub(crate) fn coin_name(record: &Value) -> &str {
    record
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("<unnamed>")
}

pub(crate) fn coin_symbol(record: &Value) -> &str {
    record
        .get("symbol")
        .and_then(Value::as_str)
        .unwrap_or("???")
}

/// Rank for display; "N/A" when absent or null.
pub(crate) fn coin_rank(record: &Value) -> String {
    record
        .get("cmc_rank")
        .and_then(Value::as_i64)
        .map_or_else(|| "N/A".to_string(), |rank| rank.to_string())
}

/// USD price when the record carries a USD quote with a numeric price.
pub(crate) fn usd_price(record: &Value) -> Option<f64> {
    record
        .get("quote")
        .and_then(|quote| quote.get("USD"))
        .and_then(|usd| usd.get("price"))
        .and_then(Value::as_f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ordered_covers_every_case_once() {
        assert_eq!(Case::ORDERED.len(), 7);
        for case in Case::ORDERED {
            assert_eq!(
                Case::ORDERED.iter().filter(|other| *other == case).count(),
                1
            );
        }
    }

    #[test]
    fn slugs_round_trip() {
        for case in Case::ORDERED {
            assert_eq!(Case::from_slug(case.slug()), Some(*case));
        }
        assert_eq!(Case::from_slug("no-such-case"), None);
    }

    #[test]
    fn accessors_tolerate_sparse_records() {
        let record = json!({ "symbol": "BTC" });
        assert_eq!(coin_name(&record), "<unnamed>");
        assert_eq!(coin_symbol(&record), "BTC");
        assert_eq!(coin_rank(&record), "N/A");
        assert_eq!(usd_price(&record), None);
    }
}
