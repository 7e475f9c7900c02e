use crate::error::RoiError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest accepted scenario name, in characters.
pub const MAX_NAME_LENGTH: usize = 255;

/// Unique, human-readable scenario name. Surrounding whitespace is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScenarioName(String);

impl ScenarioName {
    /// Validates and normalises a scenario name.
    ///
    /// # Errors
    /// Returns [`RoiError::InvalidInput`] if the name is blank or too long.
    pub fn parse(value: impl AsRef<str>) -> Result<Self, RoiError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(RoiError::invalid("Scenario name must not be empty"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(RoiError::invalid(format!(
                "Scenario name must be at most {MAX_NAME_LENGTH} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ScenarioName {
    type Error = RoiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ScenarioName> for String {
    fn from(name: ScenarioName) -> Self {
        name.0
    }
}

impl fmt::Display for ScenarioName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        let name = ScenarioName::parse("  Warehouse robots  ").unwrap();
        assert_eq!(name.as_str(), "Warehouse robots");
    }

    #[test]
    fn test_rejects_blank() {
        assert!(ScenarioName::parse("   ").is_err());
        assert!(ScenarioName::parse("").is_err());
    }

    #[test]
    fn test_length_limit() {
        assert!(ScenarioName::parse("a".repeat(MAX_NAME_LENGTH)).is_ok());
        assert!(ScenarioName::parse("a".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }
}
