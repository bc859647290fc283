use std::fmt::Write;

use crate::claim::ClaimField;
use crate::kernel::state::ShellState;
use crate::reasons::format_reason;

pub const TITLE: &str = "ClaimGuard v1";
pub const TAGLINE: &str = "Check denial risk for a medical claim.";
pub const SUBMIT_LABEL: &str = "Check Denial Risk";
pub const LOADING_LABEL: &str = "Predicting...";

/// Whole-number percentage, rounding halves up.
pub fn risk_percent(risk: f64) -> i64 {
    (risk * 100.0 + 0.5).floor() as i64
}

/// PURE FUNCTION: Converts the shell state into the text shown to the user.
pub fn render(state: &ShellState) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "{}", TITLE);
    let _ = writeln!(out, "{}", TAGLINE);
    out.push('\n');

    for field in ClaimField::ALL {
        let _ = writeln!(out, "  {}: {}", field.label(), state.form().get(field));
    }
    out.push('\n');

    let action = if state.is_loading() { LOADING_LABEL } else { SUBMIT_LABEL };
    let _ = writeln!(out, "[{}]", action);

    if let Some(error) = state.error() {
        let _ = writeln!(out, "\n{}", error);
    }

    if let Some(risk) = state.risk() {
        let _ = writeln!(out, "\nDenial Risk: {}%", risk_percent(risk));
        for raw in state.reasons() {
            let _ = writeln!(out, "  - {}", format_reason(raw));
        }
    }

    out.trim_end().to_string()
}

/// Lists the selectable values for every field, numbered from 1.
pub fn render_options() -> String {
    let mut out = String::new();

    for field in ClaimField::ALL {
        let _ = writeln!(out, "{} ({}):", field.as_str(), field.label());
        for (i, option) in field.options().iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, option);
        }
    }

    out.trim_end().to_string()
}
