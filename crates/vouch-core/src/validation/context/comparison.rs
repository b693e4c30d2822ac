use super::{ValidationContext, default_error};
use crate::{
    code,
    error::ValidationError,
    message,
    value::{Literal, Temporal, TextValue},
};
use chrono::Utc;

impl<T: PartialEq + Literal> ValidationContext<'_, T> {
    /// Fails if the value equals `other`. Two absent values are equal.
    #[inline]
    pub fn if_equals(self, other: impl Into<T>) -> Self {
        let other = other.into();
        let literal = other.to_literal();
        self.if_equals_with(other, |p| {
            default_error(p, code::INVALID, message::cannot_be_equal(p, literal))
        })
    }

    /// Fails with the error built by `factory` if the value equals `other`.
    #[inline]
    pub fn if_equals_with(
        self,
        other: impl Into<T>,
        factory: impl FnOnce(&str) -> ValidationError,
    ) -> Self {
        let failed = self.value == other.into();
        self.check_with(failed, factory)
    }

    /// Fails if the value differs from `other`. An absent value differs from any present one.
    #[inline]
    pub fn if_different(self, other: impl Into<T>) -> Self {
        let other = other.into();
        let literal = other.to_literal();
        self.if_different_with(other, |p| {
            default_error(p, code::INVALID, message::cannot_be_different(p, literal))
        })
    }

    /// Fails with the error built by `factory` if the value differs from `other`.
    #[inline]
    pub fn if_different_with(
        self,
        other: impl Into<T>,
        factory: impl FnOnce(&str) -> ValidationError,
    ) -> Self {
        let failed = self.value != other.into();
        self.check_with(failed, factory)
    }
}

impl<T: PartialOrd + Literal> ValidationContext<'_, T> {
    /// Fails if the value is greater than `limit`.
    ///
    /// For `Option` values an absent value orders before any present one,
    /// so it never exceeds a present limit.
    #[inline]
    pub fn if_greater_than(self, limit: impl Into<T>) -> Self {
        let limit = limit.into();
        let literal = limit.to_literal();
        self.if_greater_than_with(limit, |p| {
            default_error(p, code::INVALID, message::cannot_be_greater(p, literal))
        })
    }

    /// Fails with the error built by `factory` if the value is greater than `limit`.
    #[inline]
    pub fn if_greater_than_with(
        self,
        limit: impl Into<T>,
        factory: impl FnOnce(&str) -> ValidationError,
    ) -> Self {
        let failed = self.value > limit.into();
        self.check_with(failed, factory)
    }

    /// Fails if the value is less than `limit`.
    #[inline]
    pub fn if_less_than(self, limit: impl Into<T>) -> Self {
        let limit = limit.into();
        let literal = limit.to_literal();
        self.if_less_than_with(limit, |p| {
            default_error(p, code::INVALID, message::cannot_be_less(p, literal))
        })
    }

    /// Fails with the error built by `factory` if the value is less than `limit`.
    #[inline]
    pub fn if_less_than_with(
        self,
        limit: impl Into<T>,
        factory: impl FnOnce(&str) -> ValidationError,
    ) -> Self {
        let failed = self.value < limit.into();
        self.check_with(failed, factory)
    }
}

impl<T: TextValue> ValidationContext<'_, T> {
    /// Fails if the text has more than `max_length` characters. An absent value passes.
    #[inline]
    pub fn if_longer_than(self, max_length: usize) -> Self {
        self.if_longer_than_with(max_length, |p| {
            default_error(p, code::INVALID, message::cannot_be_longer(p, max_length))
        })
    }

    /// Fails with the error built by `factory` if the text has more than `max_length` characters.
    #[inline]
    pub fn if_longer_than_with(
        self,
        max_length: usize,
        factory: impl FnOnce(&str) -> ValidationError,
    ) -> Self {
        let failed = self
            .value
            .as_text()
            .is_some_and(|text| text.chars().count() > max_length);
        self.check_with(failed, factory)
    }

    /// Fails if the text has fewer than `min_length` characters. An absent value passes.
    #[inline]
    pub fn if_shorter_than(self, min_length: usize) -> Self {
        self.if_shorter_than_with(min_length, |p| {
            default_error(p, code::INVALID, message::cannot_be_shorter(p, min_length))
        })
    }

    /// Fails with the error built by `factory` if the text has fewer than `min_length` characters.
    #[inline]
    pub fn if_shorter_than_with(
        self,
        min_length: usize,
        factory: impl FnOnce(&str) -> ValidationError,
    ) -> Self {
        let failed = self
            .value
            .as_text()
            .is_some_and(|text| text.chars().count() < min_length);
        self.check_with(failed, factory)
    }
}

impl<T: Temporal> ValidationContext<'_, T> {
    /// Fails if the instant is before the current UTC time. An absent value passes.
    #[inline]
    pub fn if_less_than_utc_now(self) -> Self {
        self.if_less_than_utc_now_with(|p| {
            default_error(p, code::MIN_DATETIME_UTCNOW, message::before_utc_now(p))
        })
    }

    /// Fails with the error built by `factory` if the instant is before the current UTC time.
    #[inline]
    pub fn if_less_than_utc_now_with(self, factory: impl FnOnce(&str) -> ValidationError) -> Self {
        let failed = self.value.to_utc().is_some_and(|dt| dt < Utc::now());
        self.check_with(failed, factory)
    }

    /// Fails if the instant is after the current UTC time. An absent value passes.
    #[inline]
    pub fn if_greater_than_utc_now(self) -> Self {
        self.if_greater_than_utc_now_with(|p| {
            default_error(p, code::MAX_DATETIME_UTCNOW, message::after_utc_now(p))
        })
    }

    /// Fails with the error built by `factory` if the instant is after the current UTC time.
    #[inline]
    pub fn if_greater_than_utc_now_with(
        self,
        factory: impl FnOnce(&str) -> ValidationError,
    ) -> Self {
        let failed = self.value.to_utc().is_some_and(|dt| dt > Utc::now());
        self.check_with(failed, factory)
    }
}
