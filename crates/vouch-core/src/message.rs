//! Default descriptions for the built-in rules.
use std::fmt::Display;

pub(crate) fn cannot_be_null(property: &str) -> String {
    format!("The '{property}' cannot be null")
}

pub(crate) fn cannot_be_empty(property: &str) -> String {
    format!("The '{property}' cannot be empty")
}

pub(crate) fn cannot_be_null_or_empty(property: &str) -> String {
    format!("The '{property}' cannot be null or empty")
}

pub(crate) fn is_required(property: &str) -> String {
    format!("The '{property}' is required")
}

pub(crate) fn cannot_be_equal(property: &str, other: impl Display) -> String {
    format!("The '{property}' cannot be equal to '{other}'")
}

pub(crate) fn cannot_be_different(property: &str, other: impl Display) -> String {
    format!("The '{property}' cannot be different to '{other}'")
}

pub(crate) fn cannot_be_longer(property: &str, max_length: usize) -> String {
    format!("The '{property}' cannot be longer than {max_length} characters")
}

pub(crate) fn cannot_be_shorter(property: &str, min_length: usize) -> String {
    format!("The '{property}' cannot be shorter than {min_length} characters")
}

pub(crate) fn cannot_be_greater(property: &str, limit: impl Display) -> String {
    format!("The '{property}' cannot be greater than '{limit}'")
}

pub(crate) fn cannot_be_less(property: &str, limit: impl Display) -> String {
    format!("The '{property}' cannot be less than '{limit}'")
}

pub(crate) fn before_utc_now(property: &str) -> String {
    format!("The '{property}' cannot be less than the current UTC date and time")
}

pub(crate) fn after_utc_now(property: &str) -> String {
    format!("The '{property}' cannot be greater than the current UTC date and time")
}

pub(crate) fn is_invalid(property: &str) -> String {
    format!("The '{property}' is an invalid")
}

pub(crate) fn invalid_email(property: &str) -> String {
    format!("The '{property}' is not a valid email")
}

pub(crate) fn invalid_cvv(property: &str) -> String {
    format!("The '{property}' is an invalid CVV format")
}

pub(crate) fn invalid_card_number(property: &str) -> String {
    format!("The '{property}' is an invalid card number format")
}

pub(crate) fn invalid_expiry_date(property: &str) -> String {
    format!("The '{property}' is an invalid expiry date format")
}

pub(crate) fn expired(property: &str) -> String {
    format!("The '{property}' is an expiry date")
}

pub(crate) fn invalid_country_code(property: &str) -> String {
    format!("The '{property}' is invalid country code. ISO2 formats are allowed")
}

pub(crate) fn invalid_gender(property: &str, allowed: &[&str]) -> String {
    let allowed = allowed.join(", ");
    format!("The '{property}' is an invalid gender. Allowed values: {allowed}")
}
