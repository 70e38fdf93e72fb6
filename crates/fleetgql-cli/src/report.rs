//! Console reporting of workflow steps.
//!
//! Every step prints one ✅ or ❌ line. A failed response is followed by the
//! whole envelope as pretty JSON so the operator sees what the server said.

use std::fmt::Display;

use fleetgql_core::{ApiError, GraphQlResponse};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Default)]
pub struct Report {
    passed: usize,
    failed: usize,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, title: &str) {
        println!("\n🧪 {}", title);
    }

    pub fn pass(&mut self, label: &str) {
        self.passed += 1;
        println!("✅ {}", label);
    }

    pub fn fail(&mut self, label: &str, detail: impl Display) {
        self.failed += 1;
        println!("❌ {}: {}", label, detail);
    }

    /// Print a step that could not run because an earlier one failed.
    pub fn skip(&self, label: &str, reason: &str) {
        println!("⏭️  {} skipped: {}", label, reason);
    }

    /// Record a step that must return data and no errors. Returns the data.
    pub fn expect_data<T: Serialize>(
        &mut self,
        label: &str,
        result: Result<GraphQlResponse<T>, ApiError>,
    ) -> Option<T> {
        match result {
            Ok(response) if !response.has_errors() && response.data.is_some() => {
                self.pass(label);
                response.data
            }
            Ok(response) => {
                let detail = response
                    .error_summary()
                    .unwrap_or_else(|| "no data returned".to_string());
                self.fail(label, detail);
                println!("{}", response.to_pretty_json());
                None
            }
            Err(e) => {
                self.fail(label, &e);
                None
            }
        }
    }

    /// Record a lookup that must come back empty without errors.
    pub fn expect_absent<T: Serialize>(
        &mut self,
        label: &str,
        result: Result<GraphQlResponse<T>, ApiError>,
    ) {
        match result {
            Ok(response) if !response.has_errors() && response.data.is_none() => {
                self.pass(label);
            }
            Ok(response) => {
                let detail = response
                    .error_summary()
                    .unwrap_or_else(|| "expected no result".to_string());
                self.fail(label, detail);
                println!("{}", response.to_pretty_json());
            }
            Err(e) => self.fail(label, &e),
        }
    }

    /// Record a local assertion on data already fetched.
    pub fn check(&mut self, label: &str, ok: bool, detail: impl Display) {
        if ok {
            self.pass(label);
        } else {
            self.fail(label, detail);
        }
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn succeeded(&self) -> bool {
        self.failed == 0
    }

    pub fn print_summary(&self) {
        debug!(passed = self.passed(), failed = self.failed(), "Run finished");
        println!("\n{} passed, {} failed", self.passed(), self.failed());
    }
}
