#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod client;
pub mod retry;
pub mod scenario;

pub use client::{ApiResponse, BfhlClient};
pub use scenario::{Scenario, ScenarioReport, check_response, run_all, run_scenario, scenarios};
