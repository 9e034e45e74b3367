// src/form.rs
//! The state a form front-end renders after each submission
//!
//! Mirrors the JSON a web form expects back from its action:
//! `{"result": "...", "error": null, "timestamp": 1700000000000}`.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::engine::Outcome;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub result: Option<String>,
    pub error: Option<String>,
    /// Unix milliseconds when this state was produced
    pub timestamp: i64,
}

impl FormState {
    /// Blank state shown before the first submission
    pub fn initial() -> Self {
        Self {
            result: None,
            error: None,
            timestamp: now_millis(),
        }
    }

    pub fn from_outcome(outcome: &Outcome) -> Self {
        Self {
            result: outcome.result().map(str::to_owned),
            error: outcome.error().map(str::to_owned),
            timestamp: now_millis(),
        }
    }

    /// A front-end only reacts to states newer than the one it holds
    pub fn is_newer_than(&self, other: &FormState) -> bool {
        self.timestamp > other.timestamp
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<Outcome> for FormState {
    fn from(outcome: Outcome) -> Self {
        Self::from_outcome(&outcome)
    }
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
