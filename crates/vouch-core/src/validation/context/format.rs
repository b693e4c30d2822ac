use super::{ValidationContext, default_error};
use crate::{
    code,
    config::Settings,
    error::ValidationError,
    message,
    validation::validator::{
        CardExpiryDateValidator, CardNumberValidator, CountryCodeValidator, CvvValidator,
        EmailValidator, GenderValidator, InvalidExpiryDate, Validator,
    },
    value::TextValue,
};

impl<T: TextValue> ValidationContext<'_, T> {
    /// Fails if the text is not a valid email address. An absent value passes.
    #[inline]
    pub fn if_not_email(self) -> Self {
        self.if_not_email_with(|p| default_error(p, code::INVALID, message::invalid_email(p)))
    }

    /// Fails with the error built by `factory` if the text is not a valid email address.
    #[inline]
    pub fn if_not_email_with(self, factory: impl FnOnce(&str) -> ValidationError) -> Self {
        self.check_text(&EmailValidator, factory)
    }

    /// Alias of [`if_not_email`](Self::if_not_email).
    #[inline]
    pub fn should_be_email(self) -> Self {
        self.if_not_email()
    }

    /// Alias of [`if_not_email_with`](Self::if_not_email_with).
    #[inline]
    pub fn should_be_email_with(self, factory: impl FnOnce(&str) -> ValidationError) -> Self {
        self.if_not_email_with(factory)
    }

    /// Fails if the text is not made of 3 or 4 digits. An absent value passes.
    #[inline]
    pub fn should_be_cvv(self) -> Self {
        self.should_be_cvv_with(|p| default_error(p, code::INVALID, message::invalid_cvv(p)))
    }

    /// Fails with the error built by `factory` if the text is not made of 3 or 4 digits.
    #[inline]
    pub fn should_be_cvv_with(self, factory: impl FnOnce(&str) -> ValidationError) -> Self {
        self.check_text(&CvvValidator, factory)
    }

    /// Fails if the text is not a card number passing the Luhn checksum.
    /// An absent value passes.
    #[inline]
    pub fn should_be_card_number(self) -> Self {
        self.should_be_card_number_with(|p| {
            default_error(p, code::INVALID, message::invalid_card_number(p))
        })
    }

    /// Fails with the error built by `factory` if the text is not a valid card number.
    #[inline]
    pub fn should_be_card_number_with(
        self,
        factory: impl FnOnce(&str) -> ValidationError,
    ) -> Self {
        self.check_text(&CardNumberValidator, factory)
    }

    /// Validates the card expiry date with the configured default format.
    #[inline]
    pub fn should_be_card_expiry_date(self) -> Self {
        self.should_be_card_expiry_date_in(Settings::shared().card_expiry_format())
    }

    /// Validates the card expiry date with the format string.
    ///
    /// A malformed value fails with the `INVALID` code. A well-formed date
    /// before the current month fails with the `MIN:CURRENT_MONTH` code.
    /// An absent value passes.
    #[inline]
    pub fn should_be_card_expiry_date_in(self, format: &str) -> Self {
        self.should_be_card_expiry_date_with(
            CardExpiryDateValidator::new(format),
            |p| default_error(p, code::INVALID, message::invalid_expiry_date(p)),
            |p| default_error(p, code::MIN_CURRENT_MONTH, message::expired(p)),
        )
    }

    /// Validates the card expiry date, building a malformed-value error with
    /// `format_error` and an expired-date error with `expiry_error`.
    /// At most one of them is appended.
    pub fn should_be_card_expiry_date_with(
        self,
        validator: CardExpiryDateValidator<'_>,
        format_error: impl FnOnce(&str) -> ValidationError,
        expiry_error: impl FnOnce(&str) -> ValidationError,
    ) -> Self {
        let result = self
            .value
            .as_text()
            .map_or(Ok(()), |text| validator.validate(text));
        self.check_with(result == Err(InvalidExpiryDate::Malformed), format_error)
            .check_with(result == Err(InvalidExpiryDate::Expired), expiry_error)
    }

    /// Fails if the text is not an assigned ISO 3166-1 alpha-2 code.
    /// An absent value passes but an empty one fails.
    #[inline]
    pub fn should_be_country_code(self) -> Self {
        self.should_be_country_code_with(|p| {
            default_error(p, code::INVALID, message::invalid_country_code(p))
        })
    }

    /// Fails with the error built by `factory` if the text is not an assigned alpha-2 code.
    #[inline]
    pub fn should_be_country_code_with(
        self,
        factory: impl FnOnce(&str) -> ValidationError,
    ) -> Self {
        self.check_text(&CountryCodeValidator, factory)
    }

    /// Fails if the text is neither `MALE` nor `FEMALE`, ignoring case.
    /// An absent value passes.
    #[inline]
    pub fn should_be_gender(self) -> Self {
        self.should_be_gender_with(|p| {
            let allowed = GenderValidator::BINARY.allowed_values();
            default_error(p, code::INVALID, message::invalid_gender(p, allowed))
        })
    }

    /// Fails with the error built by `factory` if the text is neither `MALE` nor `FEMALE`.
    #[inline]
    pub fn should_be_gender_with(self, factory: impl FnOnce(&str) -> ValidationError) -> Self {
        self.check_text(&GenderValidator::BINARY, factory)
    }

    /// Fails if the text is not one of `MALE`, `FEMALE` or `OTHER`, ignoring case.
    /// An absent value passes.
    #[inline]
    pub fn should_be_gender_or_other(self) -> Self {
        self.should_be_gender_or_other_with(|p| {
            let allowed = GenderValidator::WITH_OTHER.allowed_values();
            default_error(p, code::INVALID, message::invalid_gender(p, allowed))
        })
    }

    /// Fails with the error built by `factory` if the text is not one of `MALE`, `FEMALE` or `OTHER`.
    #[inline]
    pub fn should_be_gender_or_other_with(
        self,
        factory: impl FnOnce(&str) -> ValidationError,
    ) -> Self {
        self.check_text(&GenderValidator::WITH_OTHER, factory)
    }

    /// Appends the error built by `factory` if a present text is rejected by the validator.
    fn check_text<V: Validator<str>>(
        self,
        validator: &V,
        factory: impl FnOnce(&str) -> ValidationError,
    ) -> Self {
        let failed = self
            .value
            .as_text()
            .is_some_and(|text| !validator.is_valid(text));
        self.check_with(failed, factory)
    }
}
