//! Canonical request/response scenarios for smoke-testing a live server.

use serde_json::{Value, json};
use std::fmt;
use tracing::info;

use crate::client::{ApiResponse, BfhlClient};

/// Fields every successful envelope must carry.
pub const REQUIRED_FIELDS: [&str; 4] = ["is_success", "user_id", "email", "roll_number"];

#[derive(Debug, Clone, PartialEq)]
pub enum Expectation {
    /// 2xx, `is_success: true`, and each listed field equal to its value.
    Success(Vec<(&'static str, Value)>),
    /// Client error status with `is_success: false`.
    Rejected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: &'static str,
    pub input: Value,
    pub expectation: Expectation,
}

/// Outcome of one comparison inside a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub label: String,
    pub passed: bool,
    pub detail: String,
}

impl Check {
    fn new(label: impl Into<String>, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            passed,
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioReport {
    pub name: String,
    pub checks: Vec<Check>,
    /// Transport failure; no checks ran.
    pub error: Option<String>,
}

impl ScenarioReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.error.is_none() && self.checks.iter().all(|c| c.passed)
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📝 Testing: {}", self.name)?;
        if let Some(error) = &self.error {
            writeln!(f, "❌ Error: {error}")?;
        }
        for check in &self.checks {
            let mark = if check.passed { "✅" } else { "❌" };
            writeln!(f, "{mark} {}: {}", check.label, check.detail)?;
        }
        if self.passed() {
            write!(f, "✨ {} PASSED!", self.name)
        } else {
            write!(f, "⚠️  {} has some issues", self.name)
        }
    }
}

#[must_use]
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "Example A",
            input: json!({"data": ["a", "1", "334", "4", "R", "$"]}),
            expectation: Expectation::Success(vec![
                ("odd_numbers", json!(["1"])),
                ("even_numbers", json!(["334", "4"])),
                ("alphabets", json!(["A", "R"])),
                ("special_characters", json!(["$"])),
                ("sum", json!("339")),
                ("concat_string", json!("Ra")),
            ]),
        },
        Scenario {
            name: "Example B",
            input: json!({"data": ["2", "a", "y", "4", "&", "-", "*", "5", "92", "b"]}),
            expectation: Expectation::Success(vec![
                ("odd_numbers", json!(["5"])),
                ("even_numbers", json!(["2", "4", "92"])),
                ("alphabets", json!(["A", "Y", "B"])),
                ("special_characters", json!(["&", "-", "*"])),
                ("sum", json!("103")),
                ("concat_string", json!("ByA")),
            ]),
        },
        Scenario {
            name: "Example C",
            input: json!({"data": ["A", "ABcD", "DOE"]}),
            expectation: Expectation::Success(vec![
                ("odd_numbers", json!([])),
                ("even_numbers", json!([])),
                ("alphabets", json!(["A", "ABCD", "DOE"])),
                ("special_characters", json!([])),
                ("sum", json!("0")),
                ("concat_string", json!("EoDdCbAa")),
            ]),
        },
        Scenario {
            name: "Empty input",
            input: json!({"data": []}),
            expectation: Expectation::Success(vec![
                ("odd_numbers", json!([])),
                ("even_numbers", json!([])),
                ("alphabets", json!([])),
                ("special_characters", json!([])),
                ("sum", json!("0")),
                ("concat_string", json!("")),
            ]),
        },
        Scenario {
            name: "Error Handling (Invalid Input)",
            input: json!({"invalid": "data"}),
            expectation: Expectation::Rejected,
        },
    ]
}

/// Compare a response against what `scenario` expects.
#[must_use]
pub fn check_response(scenario: &Scenario, response: &ApiResponse) -> ScenarioReport {
    let mut checks = Vec::new();

    match &scenario.expectation {
        Expectation::Success(fields) => {
            checks.push(Check::new(
                "status",
                response.is_success_status(),
                response.status.to_string(),
            ));
            for (field, expected) in fields {
                checks.push(match response.body.get(*field) {
                    Some(actual) if actual == expected => Check::new(*field, true, actual.to_string()),
                    Some(actual) => Check::new(
                        *field,
                        false,
                        format!("Expected {expected}, Got {actual}"),
                    ),
                    None => Check::new(*field, false, format!("Expected {expected}, Got nothing")),
                });
            }
            for field in REQUIRED_FIELDS {
                checks.push(match response.body.get(field) {
                    None => Check::new(field, false, "Missing required field"),
                    Some(value) if field == "is_success" && value != &Value::Bool(true) => {
                        Check::new(field, false, "is_success should be true")
                    }
                    Some(value) => Check::new(field, true, value.to_string()),
                });
            }
        }
        Expectation::Rejected => {
            let client_error = (400..500).contains(&response.status);
            checks.push(Check::new(
                "status",
                client_error,
                format!("{} (expected 4xx)", response.status),
            ));
            checks.push(Check::new(
                "is_success",
                response.is_success_flag() == Some(false),
                "API should return is_success: false for invalid input",
            ));
        }
    }

    ScenarioReport {
        name: scenario.name.to_string(),
        checks,
        error: None,
    }
}

pub async fn run_scenario(client: &BfhlClient, scenario: &Scenario) -> ScenarioReport {
    info!("Running scenario: {}", scenario.name);
    match client.classify(&scenario.input).await {
        Ok(response) => check_response(scenario, &response),
        Err(e) => ScenarioReport {
            name: scenario.name.to_string(),
            checks: Vec::new(),
            error: Some(e.to_string()),
        },
    }
}

pub async fn run_all(client: &BfhlClient) -> Vec<ScenarioReport> {
    let mut reports = Vec::new();
    for scenario in scenarios() {
        reports.push(run_scenario(client, &scenario).await);
    }
    reports
}
