//! Re-exports of common types in [`vouch-core`].
//!
//! [`vouch-core`]: https://docs.rs/vouch-core

#[doc(no_inline)]
pub use vouch_core::{
    Check, ErrorKind, Validate, Validation, ValidationContext, ValidationError,
    config::Settings,
    convert::{NumberFormat, Numeric},
    validate,
    validation::{
        CardExpiryDateValidator, CardNumberValidator, CountryCodeValidator, CvvValidator,
        EmailValidator, Gender, GenderValidator, Validator,
    },
};
