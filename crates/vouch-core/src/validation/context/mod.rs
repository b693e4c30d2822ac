use super::Validation;
use crate::{SharedString, error::ValidationError};

mod comparison;
mod conversion;
mod format;
mod presence;

/// Storage of the errors appended by a context.
#[derive(Debug)]
enum ErrorSink<'a> {
    /// A collection owned by the context.
    Owned(Validation),
    /// A collection supplied by the caller.
    Shared(&'a mut Validation),
}

impl ErrorSink<'_> {
    #[inline]
    fn get(&self) -> &Validation {
        match self {
            Self::Owned(errors) => errors,
            Self::Shared(errors) => &**errors,
        }
    }

    #[inline]
    fn get_mut(&mut self) -> &mut Validation {
        match self {
            Self::Owned(errors) => errors,
            Self::Shared(errors) => &mut **errors,
        }
    }
}

/// A value under validation, together with its property name and error collection.
///
/// Every rule evaluates the current value, appends at most one error and
/// returns the context again. Rules never short-circuit: a failed rule does
/// not prevent later rules from running.
///
/// ```
/// use vouch_core::{ValidationContext, code};
///
/// let context = ValidationContext::new("12a", "age")
///     .to_number::<u8>()
///     .if_less_than(18u8);
/// assert_eq!(*context.value(), 0);
/// assert_eq!(context.errors().len(), 2);
/// assert_eq!(context.errors().first().map(|err| err.code()), Some(code::INVALID));
/// ```
#[derive(Debug)]
pub struct ValidationContext<'a, T> {
    /// The current value.
    value: T,
    /// Property name.
    property: SharedString,
    /// Error collection.
    errors: ErrorSink<'a>,
    /// Length of the collection when the context was created.
    offset: usize,
}

impl<'a, T> ValidationContext<'a, T> {
    /// Creates a new instance with an owned error collection.
    #[inline]
    pub fn new(value: T, property: impl Into<SharedString>) -> Self {
        Self {
            value,
            property: property.into(),
            errors: ErrorSink::Owned(Validation::new()),
            offset: 0,
        }
    }

    /// Creates a new instance which appends errors into the supplied collection.
    #[inline]
    pub fn with_errors(
        value: T,
        property: impl Into<SharedString>,
        errors: &'a mut Validation,
    ) -> Self {
        let offset = errors.len();
        Self {
            value,
            property: property.into(),
            errors: ErrorSink::Shared(errors),
            offset,
        }
    }

    /// Returns a reference to the current value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns a mutable reference to the current value.
    #[inline]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Consumes the context and returns the current value.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns the property name.
    #[inline]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Returns the whole error collection, including errors appended by other contexts.
    #[inline]
    pub fn errors(&self) -> &Validation {
        self.errors.get()
    }

    /// Returns the errors appended since this context was created.
    #[inline]
    pub fn own_errors(&self) -> &[ValidationError] {
        self.errors.get().as_slice().get(self.offset..).unwrap_or_default()
    }

    /// Returns `true` if no rule of this context has failed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.own_errors().is_empty()
    }

    /// Consumes the context and returns the first error appended by it.
    pub fn into_error(self) -> Option<ValidationError> {
        match self.errors {
            ErrorSink::Owned(errors) => errors.into_iter().nth(self.offset),
            ErrorSink::Shared(errors) => errors.as_slice().get(self.offset).cloned(),
        }
    }

    /// Replaces the current value with the result of `f`.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ValidationContext<'a, U> {
        let ValidationContext {
            value,
            property,
            errors,
            offset,
        } = self;
        ValidationContext {
            value: f(value),
            property,
            errors,
            offset,
        }
    }

    /// Sets the property name used by subsequent rules.
    #[inline]
    pub fn rename(mut self, property: impl Into<SharedString>) -> Self {
        self.property = property.into();
        self
    }

    /// Appends the error built by `factory` if the predicate returns `false`.
    pub fn must(
        self,
        predicate: impl FnOnce(&T) -> bool,
        factory: impl FnOnce(&str) -> ValidationError,
    ) -> Self {
        let failed = !predicate(&self.value);
        self.check_with(failed, factory)
    }

    /// Replaces the current value.
    #[inline]
    fn replace<U>(self, value: U) -> ValidationContext<'a, U> {
        self.map(|_| value)
    }

    /// Appends the error built by `factory` if `failed` is `true`.
    fn check_with(mut self, failed: bool, factory: impl FnOnce(&str) -> ValidationError) -> Self {
        if failed {
            let error = factory(&self.property);
            self.errors.get_mut().push(error);
        }
        self
    }
}

/// Builds an error of the default kind.
#[inline]
fn default_error(property: &str, code: &'static str, description: String) -> ValidationError {
    ValidationError::new(property.to_owned(), code, description)
}

/// Starting a validation from any value.
pub trait Validate: Sized {
    /// Creates a context with an owned error collection.
    #[inline]
    fn validate_as(self, property: impl Into<SharedString>) -> ValidationContext<'static, Self> {
        ValidationContext::new(self, property)
    }

    /// Creates a context which appends errors into the supplied collection.
    #[inline]
    fn validate_in(
        self,
        errors: &mut Validation,
        property: impl Into<SharedString>,
    ) -> ValidationContext<'_, Self> {
        ValidationContext::with_errors(self, property, errors)
    }
}

impl<T> Validate for T {}

/// Applying rules without keeping a context.
pub trait Check: Sized {
    /// Runs the rules and returns the first error, or `None` if they all pass.
    ///
    /// ```
    /// use vouch_core::Check;
    ///
    /// assert!("000".check("cvv", |ctx| ctx.should_be_cvv()).is_none());
    /// let error = "00".check("cvv", |ctx| ctx.should_be_cvv()).unwrap();
    /// assert_eq!(error.description(), "The 'cvv' is an invalid CVV format");
    /// ```
    #[inline]
    fn check<U>(
        self,
        property: impl Into<SharedString>,
        rules: impl FnOnce(ValidationContext<'static, Self>) -> ValidationContext<'static, U>,
    ) -> Option<ValidationError> {
        rules(ValidationContext::new(self, property)).into_error()
    }
}

impl<T> Check for T {}
