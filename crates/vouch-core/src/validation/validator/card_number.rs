use self::InvalidCardNumber::*;
use super::Validator;
use std::fmt;

/// A validator for a payment card number.
///
/// Interior spaces and hyphens are ignored. The remaining characters must be
/// 13 to 19 ASCII digits whose Luhn checksum is divisible by 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardNumberValidator;

/// An error for the card number validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidCardNumber {
    /// The char at the index is neither a digit nor a separator.
    InvalidChar(char, usize),
    /// The number of digits is out of the range `13..=19`.
    InvalidLength(usize),
    /// The Luhn checksum does not match.
    ChecksumMismatch,
}

impl fmt::Display for InvalidCardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidChar(ch, index) => {
                write!(f, "the char `{ch}` at the index `{index}` is not a digit")
            }
            InvalidLength(len) => write!(f, "expected 13 to 19 digits, found {len}"),
            ChecksumMismatch => write!(f, "the Luhn checksum does not match"),
        }
    }
}

impl std::error::Error for InvalidCardNumber {}

impl Validator<str> for CardNumberValidator {
    type Error = InvalidCardNumber;

    fn validate(&self, data: &str) -> Result<(), Self::Error> {
        let mut digits = Vec::with_capacity(data.len());
        for (index, ch) in data.char_indices() {
            match ch {
                ' ' | '-' => continue,
                '0'..='9' => digits.push(ch as u8 - b'0'),
                _ => return Err(InvalidChar(ch, index)),
            }
        }

        let len = digits.len();
        if !(13..=19).contains(&len) {
            return Err(InvalidLength(len));
        }
        if luhn_checksum(&digits) % 10 != 0 {
            return Err(ChecksumMismatch);
        }
        Ok(())
    }
}

/// Computes the Luhn checksum of the decimal digits.
///
/// Starting from the rightmost digit, every second digit is doubled and
/// reduced by 9 when the product exceeds 9. The number is valid iff the
/// returned sum is divisible by 10.
pub fn luhn_checksum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(index, &digit)| {
            let digit = u32::from(digit);
            if index % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::{CardNumberValidator, InvalidCardNumber, Validator, luhn_checksum};

    #[test]
    fn it_computes_luhn_checksum() {
        assert_eq!(luhn_checksum(&[7, 9, 9, 2, 7, 3, 9, 8, 7, 1, 3]), 70);
        assert_eq!(luhn_checksum(&[]), 0);
    }

    #[test]
    fn it_validates_card_numbers() {
        assert!(CardNumberValidator.is_valid("4242424242424242"));
        assert!(CardNumberValidator.is_valid("4000000000006"));
        assert!(CardNumberValidator.is_valid("4000000000000000006"));
        assert!(CardNumberValidator.is_valid("4242 4242 4242 4242"));
        assert!(CardNumberValidator.is_valid("4242-4242-4242-4242"));
        assert!(CardNumberValidator.is_valid("5555555555554444"));
        assert!(CardNumberValidator.is_valid("378282246310005"));

        assert_eq!(
            CardNumberValidator.validate("4242424242424243"),
            Err(InvalidCardNumber::ChecksumMismatch)
        );
        assert_eq!(
            CardNumberValidator.validate("4000007240000008"),
            Err(InvalidCardNumber::ChecksumMismatch)
        );
    }

    #[test]
    fn it_rejects_malformed_card_numbers() {
        assert_eq!(
            CardNumberValidator.validate("4242.4242.4242.4242"),
            Err(InvalidCardNumber::InvalidChar('.', 4))
        );
        assert_eq!(
            CardNumberValidator.validate("4242_4242_4242_4242"),
            Err(InvalidCardNumber::InvalidChar('_', 4))
        );
        assert_eq!(
            CardNumberValidator.validate("424242424242"),
            Err(InvalidCardNumber::InvalidLength(12))
        );
        assert_eq!(
            CardNumberValidator.validate("42424242424242424242"),
            Err(InvalidCardNumber::InvalidLength(20))
        );
        assert_eq!(
            CardNumberValidator.validate(""),
            Err(InvalidCardNumber::InvalidLength(0))
        );
        assert!(!CardNumberValidator.is_valid("4242\t4242 4242 4242"));
    }
}
