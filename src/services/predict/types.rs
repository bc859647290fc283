use serde::{Deserialize, Deserializer, Serialize};

/// Response payload from the prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Probability in [0, 1] that the claim is denied.
    pub denial_risk: f64,
    /// Raw reason tokens, strongest contribution first. Order is kept as received.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reasons: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
