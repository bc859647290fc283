//! Reason token formatting.
//!
//! The prediction service explains a score with compact tokens such as
//! `icd_code_S43.421A (+0.32)`. This module turns each token into a sentence
//! for display. Formatting never fails: anything that is not a well-formed
//! token is returned verbatim.

use regex::Regex;
use std::sync::OnceLock;

/// Token field identifiers and their display labels.
pub const FIELD_LABELS: [(&str, &str); 4] = [
    ("icd_code", "ICD code"),
    ("cpt_code", "CPT code"),
    ("payer", "Payer"),
    ("provider_type", "Provider type"),
];

// A known identifier wins over the first-underscore split, so `icd_code_X`
// reads as field `icd_code`, not field `icd`.
const KNOWN_FIELD_PATTERN: &str =
    r"^(icd_code|cpt_code|payer|provider_type)_(.+?) \(\+?(-?(?:[0-9]+\.?[0-9]*|\.[0-9]+))\)$";
const ANY_FIELD_PATTERN: &str = r"^(.+?)_(.+?) \(\+?(-?(?:[0-9]+\.?[0-9]*|\.[0-9]+))\)$";

/// One parsed reason token, borrowing from the raw string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReasonToken<'a> {
    pub field: &'a str,
    pub value: &'a str,
    pub score: f64,
}

impl ReasonToken<'_> {
    pub fn label(&self) -> &str {
        field_label(self.field)
    }

    /// The `+` is part of the template, so a negative score renders as `+-0.15`.
    pub fn sentence(&self) -> String {
        // -0 prints as 0.00, not -0.00
        let score = if self.score == 0.0 { 0.0 } else { self.score };
        format!(
            "{} \"{}\" is associated with higher denial risk. This feature alone contributes +{:.2} to the model's prediction.",
            self.label(),
            self.value,
            score
        )
    }
}

/// Display label for a token field. Unknown fields label themselves.
pub fn field_label(field: &str) -> &str {
    FIELD_LABELS
        .iter()
        .find(|(id, _)| *id == field)
        .map(|(_, label)| *label)
        .unwrap_or(field)
}

pub struct ReasonFormatter {
    known_field: Regex,
    any_field: Regex,
}

impl Default for ReasonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReasonFormatter {
    pub fn new() -> Self {
        Self {
            known_field: Regex::new(KNOWN_FIELD_PATTERN).expect("known field pattern compiles"),
            any_field: Regex::new(ANY_FIELD_PATTERN).expect("any field pattern compiles"),
        }
    }

    pub fn parse<'a>(&self, raw: &'a str) -> Option<ReasonToken<'a>> {
        let caps = self
            .known_field
            .captures(raw)
            .or_else(|| self.any_field.captures(raw))?;

        let field = caps.get(1)?.as_str();
        let value = caps.get(2)?.as_str();
        let score = caps.get(3)?.as_str().parse::<f64>().ok()?;

        Some(ReasonToken { field, value, score })
    }

    pub fn format(&self, raw: &str) -> String {
        match self.parse(raw) {
            Some(token) => token.sentence(),
            None => raw.to_string(),
        }
    }
}

fn shared() -> &'static ReasonFormatter {
    static FORMATTER: OnceLock<ReasonFormatter> = OnceLock::new();
    FORMATTER.get_or_init(ReasonFormatter::new)
}

/// Formats one raw reason token with the process-wide formatter.
pub fn format_reason(raw: &str) -> String {
    shared().format(raw)
}

/// Parses one raw reason token with the process-wide formatter.
pub fn parse_reason(raw: &str) -> Option<ReasonToken<'_>> {
    shared().parse(raw)
}
