use crate::client::{ApiClient, ListingsQuery};
use crate::error::Result;

/// Credential presented by the invalid-key probe. Intentionally malformed.
const INVALID_API_KEY: &str = "invalid-api-key-12345";

/// Boundary parameter combinations. Every outcome is informational; the
/// sandbox lawfully accepts loose parameters, so nothing here hard-fails.
const BOUNDARY_PROBES: &[(i64, i64, &str)] = &[
    (0, 10, "Start at 0"),
    (1, 0, "Limit of 0"),
    (-1, 10, "Negative start"),
    (1, 10000, "Excessive limit"),
];

/// Case 5: probe the endpoint's rejection behavior. An authorization-class
/// status (401/403) or a timeout on the invalid credential is the expected
/// outcome. Soft case — never returns an error.
pub async fn run(client: &ApiClient) -> Result<()> {
    println!("\n🧪 Testing: Error Handling");

    probe_invalid_key(client).await;
    probe_boundaries(client).await;

    println!("✅ Error handling test completed");
    Ok(())
}

async fn probe_invalid_key(client: &ApiClient) {
    println!("\n🔑 Testing invalid API key");

    let query = ListingsQuery::new(1, 5, "USD");
    let timeout = client.config().probe_timeout;
    match client.listings_with(&query, INVALID_API_KEY, timeout).await {
        Ok(_) => {
            log::warn!("expected error for invalid API key, but request succeeded");
        }
        Err(err) if err.is_auth_rejection() => {
            println!("✅ Invalid API key properly rejected");
        }
        Err(err) if err.is_timeout() => {
            println!("✅ Request timed out as expected");
        }
        Err(err) => {
            log::warn!("unexpected error for invalid API key: {err}");
        }
    }
}

async fn probe_boundaries(client: &ApiClient) {
    println!("\n📝 Testing boundary conditions");

    let timeout = client.config().probe_timeout;
    for (start, limit, description) in BOUNDARY_PROBES {
        println!("   Testing: {description}");

        let query = ListingsQuery::new(*start, *limit, "USD");
        let api_key = client.config().api_key.clone();
        match client.listings_with(&query, &api_key, timeout).await {
            Ok(_) => {
                log::warn!("request succeeded unexpectedly for {description}");
            }
            Err(err) => match err.http_status() {
                Some(status) if status.is_client_error() || status.is_server_error() => {
                    println!("     ✅ {description} properly rejected");
                }
                _ => {
                    println!("     ℹ️  {description}: {err}");
                }
            },
        }
    }
}
