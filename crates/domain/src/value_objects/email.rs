use crate::error::RoiError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot inside the
/// domain part with at least one character on each side.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Recipient address for a generated report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses and validates an email address.
    ///
    /// # Errors
    /// Returns [`RoiError::InvalidInput`] if the address is malformed.
    pub fn parse(value: impl Into<String>) -> Result<Self, RoiError> {
        let value = value.into();
        if EMAIL_PATTERN.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(RoiError::invalid("Invalid email format"))
        }
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = RoiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        for address in ["ops@example.com", "a.b+c@mail.example.org", "x@y.z"] {
            assert!(EmailAddress::parse(address).is_ok(), "{address}");
        }
    }

    #[test]
    fn test_invalid_addresses() {
        for address in [
            "",
            "plainaddress",
            "@example.com",
            "user@",
            "user@example",
            "user@.com",
            "user@example.",
            "user name@example.com",
            "user@@example.com",
            "a@b@c.com",
            "user@exa mple.com",
            "user@example.com\n",
        ] {
            assert_eq!(
                EmailAddress::parse(address),
                Err(RoiError::invalid("Invalid email format")),
                "{address}"
            );
        }
    }
}
