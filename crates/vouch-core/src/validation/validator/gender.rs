use self::Gender::*;
use super::Validator;
use std::{fmt, str::FromStr};

/// Gender values accepted by [`GenderValidator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// The `MALE` value.
    Male,
    /// The `FEMALE` value.
    Female,
    /// The `OTHER` value.
    Other,
}

impl Gender {
    /// Returns `self` as `&'static str`.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Male => "MALE",
            Female => "FEMALE",
            Other => "OTHER",
        }
    }
}

impl fmt::Display for Gender {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = InvalidGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Male, Female, Other]
            .into_iter()
            .find(|gender| gender.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| InvalidGender(s.to_owned()))
    }
}

/// A validator for the gender.
///
/// Values are matched case-insensitively. `OTHER` is accepted only when
/// `allow_other` is set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenderValidator {
    /// Whether `OTHER` is an accepted value.
    pub allow_other: bool,
}

impl GenderValidator {
    /// A validator accepting `MALE` and `FEMALE`.
    pub const BINARY: Self = Self { allow_other: false };

    /// A validator accepting `MALE`, `FEMALE` and `OTHER`.
    pub const WITH_OTHER: Self = Self { allow_other: true };

    /// Returns the accepted values.
    #[inline]
    pub fn allowed_values(&self) -> &'static [&'static str] {
        if self.allow_other {
            &["MALE", "FEMALE", "OTHER"]
        } else {
            &["MALE", "FEMALE"]
        }
    }
}

/// An error for the gender validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidGender(String);

impl fmt::Display for InvalidGender {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = &self.0;
        write!(f, "`{value}` is not an accepted gender")
    }
}

impl std::error::Error for InvalidGender {}

impl Validator<str> for GenderValidator {
    type Error = InvalidGender;

    fn validate(&self, data: &str) -> Result<(), Self::Error> {
        match data.parse::<Gender>()? {
            Other if !self.allow_other => Err(InvalidGender(data.to_owned())),
            _ => Ok(()),
        }
    }
}
