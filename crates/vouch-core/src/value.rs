//! Capabilities of the values carried by a validation context.
//!
//! A `null` value is modelled as [`Option::None`]; every trait here is
//! implemented for `Option<T>` so that rules can tell an absent value
//! apart from a present but empty one.
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};
use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    fmt::Display,
};

/// Values which may be absent or have zero length.
pub trait Presence {
    /// Returns `true` if the value is absent.
    #[inline]
    fn is_null(&self) -> bool {
        false
    }

    /// Returns `true` if the value is present but has zero length.
    fn is_zero_length(&self) -> bool;
}

/// Values which can be viewed as text.
pub trait TextValue {
    /// Returns the text, or `None` if the value is absent.
    fn as_text(&self) -> Option<&str>;
}

/// Values which can be rendered inside a description.
pub trait Literal {
    /// Renders the value. An absent value renders as an empty string.
    fn to_literal(&self) -> String;
}

/// Values which denote an instant that can be compared with the current UTC time.
pub trait Temporal {
    /// Returns the instant in UTC, or `None` if the value is absent.
    fn to_utc(&self) -> Option<DateTime<Utc>>;
}

impl Presence for str {
    #[inline]
    fn is_zero_length(&self) -> bool {
        self.is_empty()
    }
}

impl Presence for String {
    #[inline]
    fn is_zero_length(&self) -> bool {
        self.is_empty()
    }
}

impl Presence for Cow<'_, str> {
    #[inline]
    fn is_zero_length(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Presence for [T] {
    #[inline]
    fn is_zero_length(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Presence for Vec<T> {
    #[inline]
    fn is_zero_length(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Presence for VecDeque<T> {
    #[inline]
    fn is_zero_length(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Presence for HashMap<K, V, S> {
    #[inline]
    fn is_zero_length(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Presence for BTreeMap<K, V> {
    #[inline]
    fn is_zero_length(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> Presence for HashSet<T, S> {
    #[inline]
    fn is_zero_length(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Presence for BTreeSet<T> {
    #[inline]
    fn is_zero_length(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }

    #[inline]
    fn is_zero_length(&self) -> bool {
        (**self).is_zero_length()
    }
}

impl<T: Presence> Presence for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.as_ref().is_none_or(|value| value.is_null())
    }

    #[inline]
    fn is_zero_length(&self) -> bool {
        self.as_ref().is_some_and(|value| value.is_zero_length())
    }
}

impl TextValue for str {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl TextValue for String {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl TextValue for Cow<'_, str> {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: TextValue + ?Sized> TextValue for &T {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: TextValue> TextValue for Option<T> {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(|value| value.as_text())
    }
}

macro_rules! impl_literal {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Literal for $ty {
                #[inline]
                fn to_literal(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

impl_literal!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String, NaiveDate, NaiveDateTime,
);

impl Literal for Cow<'_, str> {
    #[inline]
    fn to_literal(&self) -> String {
        self.as_ref().to_owned()
    }
}

impl<Tz> Literal for DateTime<Tz>
where
    Tz: chrono::TimeZone,
    Tz::Offset: Display,
{
    #[inline]
    fn to_literal(&self) -> String {
        self.to_string()
    }
}

impl<T: Literal + ?Sized> Literal for &T {
    #[inline]
    fn to_literal(&self) -> String {
        (**self).to_literal()
    }
}

impl<T: Literal> Literal for Option<T> {
    #[inline]
    fn to_literal(&self) -> String {
        self.as_ref().map(|value| value.to_literal()).unwrap_or_default()
    }
}

impl Temporal for DateTime<Utc> {
    #[inline]
    fn to_utc(&self) -> Option<DateTime<Utc>> {
        Some(*self)
    }
}

impl Temporal for DateTime<Local> {
    #[inline]
    fn to_utc(&self) -> Option<DateTime<Utc>> {
        Some(self.with_timezone(&Utc))
    }
}

impl Temporal for DateTime<FixedOffset> {
    #[inline]
    fn to_utc(&self) -> Option<DateTime<Utc>> {
        Some(self.with_timezone(&Utc))
    }
}

impl Temporal for NaiveDateTime {
    #[inline]
    fn to_utc(&self) -> Option<DateTime<Utc>> {
        Some(self.and_utc())
    }
}

impl Temporal for NaiveDate {
    #[inline]
    fn to_utc(&self) -> Option<DateTime<Utc>> {
        self.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
    }
}

impl<T: Temporal + ?Sized> Temporal for &T {
    #[inline]
    fn to_utc(&self) -> Option<DateTime<Utc>> {
        (**self).to_utc()
    }
}

impl<T: Temporal> Temporal for Option<T> {
    #[inline]
    fn to_utc(&self) -> Option<DateTime<Utc>> {
        self.as_ref().and_then(|value| value.to_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::{Literal, Presence, TextValue};

    #[test]
    fn it_distinguishes_null_from_empty() {
        let missing: Option<String> = None;
        assert!(missing.is_null());
        assert!(!missing.is_zero_length());

        let empty = Some(String::new());
        assert!(!empty.is_null());
        assert!(empty.is_zero_length());

        assert!(Vec::<u8>::new().is_zero_length());
        assert!(!"abc".is_zero_length());
    }

    #[test]
    fn it_renders_literals() {
        assert_eq!(Some(42).to_literal(), "42");
        assert_eq!(None::<&str>.to_literal(), "");
        assert_eq!(Some("PT").as_text(), Some("PT"));
        assert_eq!(None::<String>.as_text(), None);
    }
}
