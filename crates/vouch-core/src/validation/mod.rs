//! Fluent validation context and the ordered collection of errors.
//!
//! A [`Validation`] is a plain accumulator: it is not synchronized, so a
//! collection shared between several contexts must stay on one thread.
//! Validate on independent collections per thread and
//! [`merge`](Validation::merge) them afterwards.
use crate::{Map, error::ValidationError};
use serde::Serialize;
use smallvec::SmallVec;
use std::{fmt, slice};

mod context;
mod validator;

pub use context::{Check, Validate, ValidationContext};
pub use validator::{
    COUNTRY_CODES, CardExpiryDateValidator, CardNumberValidator, CountryCodeValidator,
    CvvValidator, EmailValidator, Gender, GenderValidator, InvalidCardNumber, InvalidCountryCode,
    InvalidCvv, InvalidEmail, InvalidExpiryDate, InvalidGender, Validator, is_country_code,
    luhn_checksum,
};

/// An ordered record of validation errors.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Validation {
    errors: SmallVec<[ValidationError; 4]>,
}

impl Validation {
    /// Creates a new instance.
    #[inline]
    pub fn new() -> Self {
        Self {
            errors: SmallVec::new(),
        }
    }

    /// Creates a new instance with the error.
    #[inline]
    pub fn from_error(error: ValidationError) -> Self {
        let mut validation = Self::new();
        validation.push(error);
        validation
    }

    /// Appends an error.
    #[inline]
    pub fn push(&mut self, error: ValidationError) {
        tracing::debug!(
            property = error.property(),
            code = error.code(),
            "{}",
            error.description()
        );
        self.errors.push(error);
    }

    /// Moves all the errors of `other` into `self`, keeping their order.
    /// Each error is appended with [`push`](Self::push).
    #[inline]
    pub fn merge(&mut self, other: Validation) {
        self.extend(other);
    }

    /// Returns the number of errors.
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if there are no errors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `true` if the validation is success.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the errors as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns an iterator over the errors.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Returns the first error.
    #[inline]
    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// Returns `true` if the validation contains an error for the property.
    #[inline]
    pub fn contains_property(&self, property: &str) -> bool {
        self.errors.iter().any(|err| err.property() == property)
    }

    /// Returns the errors for the property.
    pub fn errors_for<'a>(
        &'a self,
        property: &'a str,
    ) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.errors
            .iter()
            .filter(move |err| err.property() == property)
    }

    /// Returns a list of invalid properties without duplicates, in the order they failed.
    pub fn invalid_properties(&self) -> Vec<&str> {
        let mut properties = Vec::new();
        for err in &self.errors {
            let property = err.property();
            if !properties.contains(&property) {
                properties.push(property);
            }
        }
        properties
    }

    /// Consumes the validation and returns the first description of each property as a json object.
    #[must_use]
    pub fn into_map(self) -> Map {
        let mut map = Map::new();
        for err in self.errors {
            let property = err.property();
            let description = err.description();
            tracing::warn!("invalid value for `{property}`: {description}");
            if !map.contains_key(property) {
                map.insert(property.to_owned(), description.into());
            }
        }
        map
    }

    /// Consumes the validation and returns the errors.
    #[inline]
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors.into_vec()
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors = self
            .errors
            .iter()
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        write!(f, "{}", errors.join(","))
    }
}

impl std::error::Error for Validation {}

impl Extend<ValidationError> for Validation {
    #[inline]
    fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iter: I) {
        for error in iter {
            self.push(error);
        }
    }
}

impl FromIterator<ValidationError> for Validation {
    #[inline]
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        let mut validation = Self::new();
        validation.extend(iter);
        validation
    }
}

impl IntoIterator for Validation {
    type Item = ValidationError;
    type IntoIter = smallvec::IntoIter<[ValidationError; 4]>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Validation {
    type Item = &'a ValidationError;
    type IntoIter = slice::Iter<'a, ValidationError>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Validation;
    use crate::{ValidationError, code};
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };
    use tracing::{Event, Subscriber};
    use tracing_subscriber::{
        Layer, Registry,
        layer::{Context, SubscriberExt},
    };

    #[derive(Clone, Default)]
    struct EventCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for EventCounter {
        fn on_event(&self, _event: &Event<'_>, _ctx: Context<'_, S>) {
            self.0.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn it_records_errors_in_order() {
        let mut validation = Validation::new();
        assert!(validation.is_success());

        validation.push(ValidationError::new("name", code::REQUIRED, "first"));
        validation.push(ValidationError::new("email", code::INVALID, "second"));
        validation.push(ValidationError::new("name", code::INVALID, "third"));

        assert_eq!(validation.len(), 3);
        assert!(validation.contains_property("email"));
        assert!(!validation.contains_property("age"));
        assert_eq!(validation.invalid_properties(), vec!["name", "email"]);
        assert_eq!(validation.errors_for("name").count(), 2);
        assert_eq!(validation.to_string(), "name: first,email: second,name: third");

        let map = validation.into_map();
        assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("first"));
        assert_eq!(map.get("email").and_then(|v| v.as_str()), Some("second"));
    }

    #[test]
    fn it_merges_collections() {
        let mut left = Validation::from_error(ValidationError::new("a", code::INVALID, "a"));
        let right: Validation = [
            ValidationError::new("b", code::INVALID, "b"),
            ValidationError::new("c", code::INVALID, "c"),
        ]
        .into_iter()
        .collect();
        left.merge(right);
        assert_eq!(left.invalid_properties(), vec!["a", "b", "c"]);
    }

    #[test]
    fn it_traces_every_appended_error() {
        let counter = EventCounter::default();
        let subscriber = Registry::default().with(counter.clone());
        tracing::subscriber::with_default(subscriber, || {
            let mut left = Validation::from_error(ValidationError::new("a", code::INVALID, "a"));
            let right: Validation = [
                ValidationError::new("b", code::INVALID, "b"),
                ValidationError::new("c", code::INVALID, "c"),
            ]
            .into_iter()
            .collect();
            left.merge(right);
            left.extend([ValidationError::new("d", code::REQUIRED, "d")]);
            assert_eq!(left.len(), 4);
        });
        assert_eq!(counter.0.load(Ordering::Relaxed), 6);
    }
}
