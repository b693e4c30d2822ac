//! Conversions from text to numbers and dates.
//!
//! Numbers are converted through the [`Numeric`] trait, so an unsupported
//! target type is rejected by the compiler. [`convert_text`] dispatches on
//! the requested type at run time instead and reports an unsupported type
//! with an [`InvalidTypeError`].
use crate::config::Settings;
use chrono::{DateTime, Utc};
use std::{any::Any, fmt};

mod date_time;
mod number;

pub use date_time::parse_date_time;
pub use number::{NumberFormat, Numeric, parse_number};

/// An error for a conversion to an unsupported type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTypeError {
    /// Name of the rejected type.
    type_name: &'static str,
}

impl InvalidTypeError {
    /// Creates a new instance for the type `V`.
    #[inline]
    pub fn of<V: ?Sized>() -> Self {
        Self {
            type_name: std::any::type_name::<V>(),
        }
    }

    /// Returns the name of the rejected type.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Display for InvalidTypeError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_name = self.type_name;
        write!(f, "Invalid type '{type_name}'")
    }
}

impl std::error::Error for InvalidTypeError {}

/// Converts the text into a value of type `V` selected at run time.
///
/// Supported types are the integers `i8` to `i64` and `u8` to `u64`,
/// `f32`, `f64` and `DateTime<Utc>`. Returns `Ok(None)` if the text is absent
/// or can not be parsed.
pub fn convert_text<V: 'static>(
    text: Option<&str>,
    settings: &Settings,
) -> Result<Option<V>, InvalidTypeError> {
    let mut slot: Option<V> = None;
    let any = &mut slot as &mut dyn Any;
    macro_rules! dispatch_number {
        ($($ty:ty),+) => {
            $(
                if let Some(out) = any.downcast_mut::<Option<$ty>>() {
                    *out = text.and_then(|s| parse_number::<$ty>(s, settings.number_format()));
                    return Ok(slot);
                }
            )+
        };
    }
    dispatch_number!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
    if let Some(out) = any.downcast_mut::<Option<DateTime<Utc>>>() {
        *out = text.and_then(|s| parse_date_time(s, settings.date_time_format()));
        return Ok(slot);
    }
    Err(InvalidTypeError::of::<V>())
}
