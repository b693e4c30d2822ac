//! Structured errors recorded by validation rules.
use self::ErrorKind::*;
use crate::SharedString;
use serde::{Deserialize, Serialize};
use std::{error, fmt};

/// Discriminant selecting which concrete error variant is built.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    #[default]
    /// A generic validation failure.
    Validation,
    /// The caller is not allowed to supply the value.
    Forbidden,
    /// The caller is not authenticated for the value.
    Unauthorized,
    /// The value refers to something that does not exist.
    NotFound,
    /// The value conflicts with existing state.
    Conflict,
}

impl ErrorKind {
    /// Returns `self` as `&'static str`.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Validation => "validation",
            Forbidden => "forbidden",
            Unauthorized => "unauthorized",
            NotFound => "not_found",
            Conflict => "conflict",
        }
    }
}

impl fmt::Display for ErrorKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error for a single property, built by a failing rule.
///
/// The three textual fields are kept exactly as given, so an error returned
/// from a caller-supplied factory reaches the collection untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error variant.
    #[serde(default)]
    kind: ErrorKind,
    /// Property name.
    property: SharedString,
    /// Machine-readable code.
    code: SharedString,
    /// Human-readable description.
    description: SharedString,
}

impl ValidationError {
    /// Creates a new generic validation error.
    #[inline]
    pub fn new(
        property: impl Into<SharedString>,
        code: impl Into<SharedString>,
        description: impl Into<SharedString>,
    ) -> Self {
        Self::with_kind(Validation, property, code, description)
    }

    /// Creates a new error of the specified kind.
    #[inline]
    pub fn with_kind(
        kind: ErrorKind,
        property: impl Into<SharedString>,
        code: impl Into<SharedString>,
        description: impl Into<SharedString>,
    ) -> Self {
        Self {
            kind,
            property: property.into(),
            code: code.into(),
            description: description.into(),
        }
    }

    /// Creates a new error of the [`Forbidden`](ErrorKind::Forbidden) kind.
    #[inline]
    pub fn forbidden(
        property: impl Into<SharedString>,
        code: impl Into<SharedString>,
        description: impl Into<SharedString>,
    ) -> Self {
        Self::with_kind(Forbidden, property, code, description)
    }

    /// Creates a new error of the [`Unauthorized`](ErrorKind::Unauthorized) kind.
    #[inline]
    pub fn unauthorized(
        property: impl Into<SharedString>,
        code: impl Into<SharedString>,
        description: impl Into<SharedString>,
    ) -> Self {
        Self::with_kind(Unauthorized, property, code, description)
    }

    /// Creates a new error of the [`NotFound`](ErrorKind::NotFound) kind.
    #[inline]
    pub fn not_found(
        property: impl Into<SharedString>,
        code: impl Into<SharedString>,
        description: impl Into<SharedString>,
    ) -> Self {
        Self::with_kind(NotFound, property, code, description)
    }

    /// Creates a new error of the [`Conflict`](ErrorKind::Conflict) kind.
    #[inline]
    pub fn conflict(
        property: impl Into<SharedString>,
        code: impl Into<SharedString>,
        description: impl Into<SharedString>,
    ) -> Self {
        Self::with_kind(Conflict, property, code, description)
    }

    /// Returns the error kind.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the property name.
    #[inline]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Returns the error code.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the description.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for ValidationError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let property = &self.property;
        let description = &self.description;
        write!(f, "{property}: {description}")
    }
}

impl error::Error for ValidationError {}
