use std::time::Instant;

use crate::cases::Case;
use crate::client::ApiClient;
use crate::report::{aggregate, SuiteReport, TestOutcome};

/// Run the full suite in its canonical order.
pub async fn run_all(client: &ApiClient) -> SuiteReport {
    run_cases(client, Case::ORDERED).await
}

/// Run the given cases strictly sequentially, timing each one and isolating
/// its errors. A failed case is recorded and the runner moves on — the
/// suite collects all failures rather than stopping at the first.
pub async fn run_cases(client: &ApiClient, cases: &[Case]) -> SuiteReport {
    let mut outcomes = Vec::with_capacity(cases.len());

    for case in cases {
        let started = Instant::now();
        let result = case.run(client).await;
        let elapsed = started.elapsed();

        match result {
            Ok(()) => {
                println!("⏱️  Test completed in {}ms", elapsed.as_millis());
                outcomes.push(TestOutcome::pass(case.name(), elapsed));
            }
            Err(err) => {
                println!("❌ Test {} failed: {err}", case.name());
                outcomes.push(TestOutcome::fail(case.name(), elapsed, err.to_string()));
            }
        }
    }

    aggregate(outcomes)
}
