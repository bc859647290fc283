use reqwest::StatusCode;

/// Failure talking to the prediction service.
///
/// The shell collapses every variant into one generic message; the variants
/// exist for logging.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("prediction service returned {0}")]
    Status(StatusCode),

    #[error("malformed prediction response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A console line that could not be turned into an event.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsoleError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("unknown field '{0}' (expected icd_code, cpt_code, payer or provider_type)")]
    UnknownField(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
}
