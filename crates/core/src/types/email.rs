//! Validated email address.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Ways an email address can fail validation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// Nothing left after trimming whitespace.
    #[error("email address is empty")]
    Empty,
    /// Longer than the RFC 5321 limit of 254 octets.
    #[error("email address is longer than {} characters", Email::MAX_LEN)]
    TooLong,
    /// No @ separator anywhere in the input.
    #[error("email address is missing an @")]
    MissingAt,
    /// Nothing before the @.
    #[error("email address has nothing before the @")]
    MissingLocalPart,
    /// Nothing after the @.
    #[error("email address has nothing after the @")]
    MissingDomain,
}

/// An email address that passed structural validation.
///
/// Validation is deliberately shallow: a non-empty local part and domain on
/// either side of an @, within the RFC 5321 length limit. Deliverability is
/// the mail server's problem, not ours.
///
/// ```
/// use emporium_core::Email;
///
/// assert!(Email::parse("staff@example.com").is_ok());
/// assert!(Email::parse("first.last+tag@shop.example").is_ok());
///
/// assert!(Email::parse("").is_err());
/// assert!(Email::parse("no-at-sign").is_err());
/// assert!(Email::parse("@example.com").is_err());
/// assert!(Email::parse("staff@").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// RFC 5321 limit on a full address.
    pub const MAX_LEN: usize = 254;

    /// Validate and wrap an email address, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError`] when the trimmed input is empty, too long, or
    /// not of the form `local@domain`.
    pub fn parse(input: &str) -> Result<Self, EmailError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(EmailError::Empty);
        }
        if trimmed.len() > Self::MAX_LEN {
            return Err(EmailError::TooLong);
        }

        let (local, domain) = trimmed.split_once('@').ok_or(EmailError::MissingAt)?;
        if local.is_empty() {
            return Err(EmailError::MissingLocalPart);
        }
        if domain.is_empty() {
            return Err(EmailError::MissingDomain);
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// The address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the owned address string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
