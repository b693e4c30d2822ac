use super::{ValidationContext, default_error};
use crate::{code, error::ValidationError, message, value::Presence};

impl<T> ValidationContext<'_, Option<T>> {
    /// Fails if the value is absent.
    #[inline]
    pub fn if_null(self) -> Self {
        self.if_null_with(|p| default_error(p, code::REQUIRED, message::cannot_be_null(p)))
    }

    /// Fails with the error built by `factory` if the value is absent.
    #[inline]
    pub fn if_null_with(self, factory: impl FnOnce(&str) -> ValidationError) -> Self {
        let failed = self.value.is_none();
        self.check_with(failed, factory)
    }
}

impl<T: Presence> ValidationContext<'_, T> {
    /// Fails if the value is present but has zero length. An absent value passes.
    #[inline]
    pub fn if_empty(self) -> Self {
        self.if_empty_with(|p| default_error(p, code::REQUIRED, message::cannot_be_empty(p)))
    }

    /// Fails with the error built by `factory` if the value is present but has zero length.
    #[inline]
    pub fn if_empty_with(self, factory: impl FnOnce(&str) -> ValidationError) -> Self {
        let failed = self.value.is_zero_length();
        self.check_with(failed, factory)
    }

    /// Fails if the value is absent or has zero length.
    #[inline]
    pub fn if_null_or_empty(self) -> Self {
        self.if_null_or_empty_with(|p| {
            default_error(p, code::REQUIRED, message::cannot_be_null_or_empty(p))
        })
    }

    /// Fails with the error built by `factory` if the value is absent or has zero length.
    #[inline]
    pub fn if_null_or_empty_with(self, factory: impl FnOnce(&str) -> ValidationError) -> Self {
        let failed = self.value.is_null() || self.value.is_zero_length();
        self.check_with(failed, factory)
    }

    /// Fails if the value is absent or has zero length, reporting the property as required.
    #[inline]
    pub fn should_be_required(self) -> Self {
        self.should_be_required_with(|p| default_error(p, code::REQUIRED, message::is_required(p)))
    }

    /// Fails with the error built by `factory` if the value is absent or has zero length.
    #[inline]
    pub fn should_be_required_with(self, factory: impl FnOnce(&str) -> ValidationError) -> Self {
        self.if_null_or_empty_with(factory)
    }
}
