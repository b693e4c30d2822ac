use self::InvalidEmail::*;
use super::Validator;
use crate::LazyLock;
use regex::Regex;
use std::fmt;

/// A validator for the email address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailValidator;

/// An error for the email address validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidEmail {
    /// The value is empty.
    Empty,
    /// The user info is too long.
    UserLengthExceeded,
    /// The domain info is too long.
    DomainLengthExceeded,
    /// The value is not a well-formed address.
    Malformed,
}

impl fmt::Display for InvalidEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Empty => write!(f, "value is empty"),
            UserLengthExceeded => {
                write!(f, "user length exceeded maximum of 64 characters")
            }
            DomainLengthExceeded => {
                write!(f, "domain length exceeded maximum of 255 characters")
            }
            Malformed => write!(f, "value is not a well-formed email address"),
        }
    }
}

impl std::error::Error for InvalidEmail {}

impl Validator<str> for EmailValidator {
    type Error = InvalidEmail;

    fn validate(&self, data: &str) -> Result<(), Self::Error> {
        if data.is_empty() {
            return Err(Empty);
        }
        if let Some((user, domain)) = data.rsplit_once('@') {
            if user.len() > 64 {
                return Err(UserLengthExceeded);
            }
            if domain.len() > 255 {
                return Err(DomainLengthExceeded);
            }
        }
        if !EMAIL_PATTERN.is_match(data) {
            return Err(Malformed);
        }
        Ok(())
    }
}

/// Regex for the email address.
///
/// The user part is a dot-separated list of atoms; the domain is one or more
/// labels followed by an alphanumeric top-level label.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i-u)^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z0-9]+\z",
    )
    .expect("fail to create a regex for the email address")
});
