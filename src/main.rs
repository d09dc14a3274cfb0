use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::Parser;

use cmc_conformance::cases::Case;
use cmc_conformance::client::ApiClient;
use cmc_conformance::config::{HarnessConfig, SANDBOX_BASE_URL};
use cmc_conformance::runner;

#[derive(Parser)]
#[command(
    name = "cmc-conformance",
    about = "Conformance test harness for the CoinMarketCap listings/latest endpoint"
)]
struct Cli {
    /// Base URL of the API under test.
    #[arg(long, default_value = SANDBOX_BASE_URL)]
    base_url: String,

    /// API credential. Falls back to $CMC_PRO_API_KEY, then the published
    /// sandbox key.
    #[arg(long)]
    api_key: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Run a single case instead of the full suite
    /// (basic, structure, max-limit, conversion, errors, performance, quality).
    #[arg(long)]
    case: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = build_config(&cli).context("failed to assemble harness configuration")?;
    let cases = select_cases(cli.case.as_deref())?;

    print_banner(&config);

    let client = ApiClient::new(config);
    let report = runner::run_cases(&client, cases).await;
    report.print_summary();

    std::process::exit(report.exit_code());
}

fn build_config(cli: &Cli) -> Result<HarnessConfig> {
    let mut config = HarnessConfig::from_env();
    config.base_url = cli.base_url.clone();
    if let Some(key) = &cli.api_key {
        config.api_key = key.clone();
    }
    if config.api_key.trim().is_empty() {
        bail!("API key must not be empty");
    }

    config.request_timeout = Duration::from_secs(cli.timeout_secs.max(1));
    Ok(config)
}

fn select_cases(slug: Option<&str>) -> Result<&'static [Case]> {
    match slug {
        None => Ok(Case::ORDERED),
        Some(slug) => {
            let case = Case::from_slug(slug)
                .with_context(|| format!("unknown test case `{slug}`"))?;
            let index = Case::ORDERED
                .iter()
                .position(|candidate| *candidate == case)
                .context("case missing from suite order")?;
            Ok(&Case::ORDERED[index..=index])
        }
    }
}

fn print_banner(config: &HarnessConfig) {
    println!("🚀 Starting CoinMarketCap API Tests");
    println!("=====================================");
    println!("🕐 Run started at {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!("📡 Testing endpoint: {}", config.listings_url());
    println!("🔑 Using API key: {}", config.key_fingerprint());
    if config.base_url == SANDBOX_BASE_URL {
        println!("🔷 Note: Using SANDBOX API - data may be limited/mock");
    }
}
