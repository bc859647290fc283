pub mod formatter;

pub use formatter::{field_label, format_reason, parse_reason, ReasonFormatter, ReasonToken};
