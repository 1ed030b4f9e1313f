//! Employment type enumeration.

use serde::{Deserialize, Serialize};

/// Contract form of a job posting. Serialized with the Japanese labels the
/// web client displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentType {
    /// Regular full-time employment.
    #[serde(rename = "正社員")]
    FullTime,
    /// Fixed-term contract.
    #[serde(rename = "契約社員")]
    Contract,
    /// Outsourced / freelance engagement.
    #[serde(rename = "業務委託")]
    Outsourced,
}

impl EmploymentType {
    /// Return the display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "正社員",
            Self::Contract => "契約社員",
            Self::Outsourced => "業務委託",
        }
    }
}

impl std::fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
