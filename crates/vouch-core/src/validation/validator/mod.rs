//! Format validators for common domain values.

mod card_expiry_date;
mod card_number;
mod country_code;
mod cvv;
mod email;
mod gender;

pub use card_expiry_date::{CardExpiryDateValidator, InvalidExpiryDate};
pub use card_number::{CardNumberValidator, InvalidCardNumber, luhn_checksum};
pub use country_code::{COUNTRY_CODES, CountryCodeValidator, InvalidCountryCode, is_country_code};
pub use cvv::{CvvValidator, InvalidCvv};
pub use email::{EmailValidator, InvalidEmail};
pub use gender::{Gender, GenderValidator, InvalidGender};

/// A generic validator.
pub trait Validator<T: ?Sized> {
    /// The error type.
    type Error: std::error::Error;

    /// Validates the data.
    fn validate(&self, data: &T) -> Result<(), Self::Error>;

    /// Returns `true` if the data is valid.
    #[inline]
    fn is_valid(&self, data: &T) -> bool {
        self.validate(data).is_ok()
    }
}
