use self::InvalidCvv::*;
use super::Validator;
use std::fmt;

/// A validator for the card verification value.
///
/// A CVV consists of exactly 3 or 4 ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CvvValidator;

/// An error for the CVV validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidCvv {
    /// The number of characters is not 3 or 4.
    InvalidLength(usize),
    /// The char at the index is not an ASCII digit.
    InvalidChar(char, usize),
}

impl fmt::Display for InvalidCvv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidLength(len) => write!(f, "expected 3 or 4 digits, found {len} characters"),
            InvalidChar(ch, index) => {
                write!(f, "the char `{ch}` at the index `{index}` is not a digit")
            }
        }
    }
}

impl std::error::Error for InvalidCvv {}

impl Validator<str> for CvvValidator {
    type Error = InvalidCvv;

    fn validate(&self, data: &str) -> Result<(), Self::Error> {
        for (index, ch) in data.char_indices() {
            if !ch.is_ascii_digit() {
                return Err(InvalidChar(ch, index));
            }
        }

        let len = data.len();
        if !(3..=4).contains(&len) {
            return Err(InvalidLength(len));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{CvvValidator, InvalidCvv, Validator};

    #[test]
    fn it_validates_cvv() {
        assert!(CvvValidator.is_valid("000"));
        assert!(CvvValidator.is_valid("0000"));
        assert!(CvvValidator.is_valid("123"));
        assert!(CvvValidator.is_valid("9876"));

        assert_eq!(CvvValidator.validate("00"), Err(InvalidCvv::InvalidLength(2)));
        assert_eq!(
            CvvValidator.validate("12345"),
            Err(InvalidCvv::InvalidLength(5))
        );
        assert_eq!(
            CvvValidator.validate("121.3"),
            Err(InvalidCvv::InvalidChar('.', 3))
        );
        assert!(!CvvValidator.is_valid(""));
        assert!(!CvvValidator.is_valid(" 123"));
        assert!(!CvvValidator.is_valid("123 "));
        assert!(!CvvValidator.is_valid("１２３"));
    }
}
