use crate::claim::{ClaimField, ClaimInput};
use crate::services::predict::PredictionResult;

use super::event::SubmissionId;

pub const FAILURE_MESSAGE: &str = "Failed to get prediction.";

/// Strict state delta. This is the ONLY way state mutates.
#[derive(Debug, Clone, PartialEq)]
pub enum StateDelta {
    FieldEdited { field: ClaimField, value: String },
    SubmissionStarted(SubmissionId),
    PredictionSucceeded(PredictionResult),
    PredictionFailed,
}

/// Everything the console shows: the form and the last result.
#[derive(Debug, Clone, Default)]
pub struct ShellState {
    // Private fields to enforce encapsulation
    form: ClaimInput,
    pending: Option<SubmissionId>,
    risk: Option<f64>,
    reasons: Vec<String>,
    error: Option<String>,
    // Monotonic, bumped on every reduction
    pub version: u64,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(&mut self, delta: StateDelta) {
        self.version += 1;

        match delta {
            StateDelta::FieldEdited { field, value } => {
                self.form.set(field, value);
            }
            StateDelta::SubmissionStarted(id) => {
                self.pending = Some(id);
                self.error = None;
                self.risk = None;
                self.reasons.clear();
            }
            StateDelta::PredictionSucceeded(result) => {
                self.pending = None;
                self.risk = Some(result.denial_risk);
                self.reasons = result.reasons;
            }
            StateDelta::PredictionFailed => {
                self.pending = None;
                self.risk = None;
                self.reasons.clear();
                self.error = Some(FAILURE_MESSAGE.to_string());
            }
        }
    }

    // Read-only accessors for rendering
    pub fn form(&self) -> &ClaimInput {
        &self.form
    }

    pub fn pending(&self) -> Option<SubmissionId> {
        self.pending
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn risk(&self) -> Option<f64> {
        self.risk
    }

    /// Raw reason tokens in the order the service sent them.
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
