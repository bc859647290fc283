use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four claim attributes the prediction service scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimField {
    IcdCode,
    CptCode,
    Payer,
    ProviderType,
}

impl ClaimField {
    /// Form order.
    pub const ALL: [ClaimField; 4] = [
        ClaimField::IcdCode,
        ClaimField::CptCode,
        ClaimField::Payer,
        ClaimField::ProviderType,
    ];

    /// Wire name, as used in the request body and in reason tokens.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimField::IcdCode => "icd_code",
            ClaimField::CptCode => "cpt_code",
            ClaimField::Payer => "payer",
            ClaimField::ProviderType => "provider_type",
        }
    }

    /// Form label.
    pub fn label(&self) -> &'static str {
        match self {
            ClaimField::IcdCode => "ICD Code",
            ClaimField::CptCode => "CPT Code",
            ClaimField::Payer => "Payer",
            ClaimField::ProviderType => "Provider Type",
        }
    }

    /// Convenience picks offered by the console. Not a validation list.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            ClaimField::IcdCode => &["S43.421A", "M54.5", "J45.909", "E11.9", "I10"],
            ClaimField::CptCode => &["73721", "99213", "70450", "97110", "93000"],
            ClaimField::Payer => &["Blue Cross", "Aetna", "UnitedHealthcare", "Medicare", "Cigna"],
            ClaimField::ProviderType => &[
                "Orthopedic",
                "Chiropractor",
                "Radiologist",
                "Physical Therapist",
                "Primary Care",
            ],
        }
    }
}

impl fmt::Display for ClaimField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown claim field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for ClaimField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClaimField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Request payload. Serializes to exactly the four string fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimInput {
    pub icd_code: String,
    pub cpt_code: String,
    pub payer: String,
    pub provider_type: String,
}

impl Default for ClaimInput {
    fn default() -> Self {
        Self {
            icd_code: "S43.421A".to_string(),
            cpt_code: "73721".to_string(),
            payer: "Blue Cross".to_string(),
            provider_type: "Chiropractor".to_string(),
        }
    }
}

impl ClaimInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ClaimField) -> &str {
        match field {
            ClaimField::IcdCode => &self.icd_code,
            ClaimField::CptCode => &self.cpt_code,
            ClaimField::Payer => &self.payer,
            ClaimField::ProviderType => &self.provider_type,
        }
    }

    pub fn set(&mut self, field: ClaimField, value: impl Into<String>) {
        let slot = match field {
            ClaimField::IcdCode => &mut self.icd_code,
            ClaimField::CptCode => &mut self.cpt_code,
            ClaimField::Payer => &mut self.payer,
            ClaimField::ProviderType => &mut self.provider_type,
        };
        *slot = value.into();
    }
}
