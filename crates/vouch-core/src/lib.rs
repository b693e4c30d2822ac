#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

mod message;

pub mod code;
pub mod config;
pub mod convert;
pub mod error;
pub mod extension;
pub mod validation;
pub mod value;

pub use error::{ErrorKind, ValidationError};
pub use validation::{Check, Validate, Validation, ValidationContext};

/// An allocation-optimized string.
pub type SharedString = std::borrow::Cow<'static, str>;

/// A value which is initialized on the first access.
pub type LazyLock<T> = std::sync::LazyLock<T>;

/// A JSON key-value type.
pub type Map = serde_json::Map<String, serde_json::Value>;

/// Creates a [`ValidationContext`] whose property name is the source text of the expression.
///
/// The first form owns a fresh error collection; the second appends into
/// the supplied [`Validation`].
///
/// ```
/// use vouch_core::{validate, Validation};
///
/// let email = "fake@fake.tk";
/// let context = validate!(email).if_not_email();
/// assert_eq!(context.property(), "email");
/// assert!(context.is_valid());
///
/// let mut errors = Validation::new();
/// let name = String::new();
/// validate!(name, &mut errors).if_null_or_empty();
/// assert_eq!(errors.invalid_properties(), vec!["name"]);
/// ```
#[macro_export]
macro_rules! validate {
    ($value:expr) => {
        $crate::ValidationContext::new($value, stringify!($value))
    };
    ($value:expr, $errors:expr) => {
        $crate::ValidationContext::with_errors($value, stringify!($value), $errors)
    };
}
