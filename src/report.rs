use std::time::Duration;

/// Static remediation hints printed when any hard-assertion case fails.
/// Fixed text, not derived from the observed errors.
pub const REMEDIATION_HINTS: &[&str] = &[
    "Check your internet connection",
    "Verify your API key is valid",
    "Check if you have exceeded rate limits",
    "Review the endpoint URL and parameters",
];

/// Result of one test case.
#[derive(Debug)]
pub struct TestOutcome {
    pub name: &'static str,
    pub passed: bool,
    pub duration: Duration,
    /// Failure diagnostic; `None` on pass.
    pub detail: Option<String>,
}

impl TestOutcome {
    pub fn pass(name: &'static str, duration: Duration) -> Self {
        Self {
            name,
            passed: true,
            duration,
            detail: None,
        }
    }

    pub fn fail(name: &'static str, duration: Duration, detail: String) -> Self {
        Self {
            name,
            passed: false,
            duration,
            detail: Some(detail),
        }
    }
}

/// Aggregate of a full suite run. Built fresh per run and discarded after
/// the summary is printed; nothing persists across runs.
#[derive(Debug)]
pub struct SuiteReport {
    pub outcomes: Vec<TestOutcome>,
    pub passed: usize,
    pub failed: usize,
    /// Sum of per-case durations. The suite is sequential, so this matches
    /// the wall clock of the whole run.
    pub total_duration: Duration,
}

/// Tally pass/fail counts and total elapsed time over a finished run.
pub fn aggregate(outcomes: Vec<TestOutcome>) -> SuiteReport {
    let passed = outcomes.iter().filter(|outcome| outcome.passed).count();
    let failed = outcomes.len() - passed;
    let total_duration = outcomes.iter().map(|outcome| outcome.duration).sum();

    SuiteReport {
        outcomes,
        passed,
        failed,
        total_duration,
    }
}

impl SuiteReport {
    /// Passed share of all cases, as a percentage.
    pub fn success_rate(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        self.passed as f64 / self.outcomes.len() as f64 * 100.0
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// The only externally observable contract of the harness as a CLI tool.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    /// Print the final summary block, mirroring the per-case markers emitted
    /// while the suite ran.
    pub fn print_summary(&self) {
        println!();
        println!("📊 Test Results Summary");
        println!("=======================");
        println!("✅ Passed: {}", self.passed);
        println!("❌ Failed: {}", self.failed);
        println!("📈 Success Rate: {:.1}%", self.success_rate());
        println!(
            "⏱️  Total Test Duration: {}ms ({:.1}s)",
            self.total_duration.as_millis(),
            self.total_duration.as_secs_f64()
        );

        if self.is_success() {
            println!();
            println!("🎉 All tests passed successfully!");
            println!("✨ The listings endpoint conforms to the expected contract.");
        } else {
            println!();
            println!("⚠️  Some tests failed. Please review the errors above.");
            println!("💡 Common issues:");
            for hint in REMEDIATION_HINTS {
                println!("   - {hint}");
            }
        }
    }
}
