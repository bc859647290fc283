use std::fmt;
use uuid::Uuid;

use crate::claim::ClaimField;
use crate::services::predict::PredictionResult;

/// Identifies one submission so a late answer cannot overwrite a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionId(pub Uuid);

impl SubmissionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// User changed one form field
    FieldEdited { field: ClaimField, value: String },
    /// User asked for a prediction
    Submit,
    /// Background request finished
    PredictionCompleted {
        submission: SubmissionId,
        outcome: PredictionOutcome,
    },
    Show,
    Options,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    Succeeded(PredictionResult),
    /// Detail is for logs only; the user sees a generic message.
    Failed(String),
}
