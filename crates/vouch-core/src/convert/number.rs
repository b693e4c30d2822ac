/// Separators used when parsing floating-point numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// Decimal separator.
    pub decimal_separator: char,
    /// Optional group separator, skipped while parsing.
    pub group_separator: Option<char>,
}

impl NumberFormat {
    /// The invariant format: `.` as the decimal separator and no group separator.
    pub const INVARIANT: Self = Self {
        decimal_separator: '.',
        group_separator: None,
    };

    /// Creates a new instance.
    #[inline]
    pub fn new(decimal_separator: char, group_separator: Option<char>) -> Self {
        Self {
            decimal_separator,
            group_separator,
        }
    }

    /// Rewrites the text into the invariant format.
    /// Returns `None` if a `.` is found where it is neither separator.
    fn normalize(&self, text: &str) -> Option<String> {
        let mut normalized = String::with_capacity(text.len());
        for ch in text.chars() {
            if ch == self.decimal_separator {
                normalized.push('.');
            } else if self.group_separator == Some(ch) {
                continue;
            } else if ch == '.' {
                return None;
            } else {
                normalized.push(ch);
            }
        }
        Some(normalized)
    }
}

impl Default for NumberFormat {
    #[inline]
    fn default() -> Self {
        Self::INVARIANT
    }
}

/// Numeric types supported by [`to_number`](crate::ValidationContext::to_number).
pub trait Numeric: Copy + Default + 'static {
    /// Parses the trimmed text.
    fn parse_text(text: &str, format: &NumberFormat) -> Option<Self>;
}

macro_rules! impl_integer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Numeric for $ty {
                #[inline]
                fn parse_text(text: &str, _format: &NumberFormat) -> Option<Self> {
                    text.parse().ok()
                }
            }
        )+
    };
}

macro_rules! impl_float {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Numeric for $ty {
                fn parse_text(text: &str, format: &NumberFormat) -> Option<Self> {
                    if format == &NumberFormat::INVARIANT {
                        text.parse().ok()
                    } else {
                        format.normalize(text)?.parse().ok()
                    }
                }
            }
        )+
    };
}

impl_integer!(i8, i16, i32, i64, u8, u16, u32, u64);
impl_float!(f32, f64);

/// Parses the text as a number of type `N`, ignoring surrounding whitespace.
/// The format only affects floating-point types.
#[inline]
pub fn parse_number<N: Numeric>(text: &str, format: &NumberFormat) -> Option<N> {
    N::parse_text(text.trim(), format)
}

#[cfg(test)]
mod tests {
    use super::{NumberFormat, parse_number};

    #[test]
    fn it_parses_integers() {
        let format = NumberFormat::default();
        assert_eq!(parse_number::<i32>("42", &format), Some(42));
        assert_eq!(parse_number::<i32>(" -7 ", &format), Some(-7));
        assert_eq!(parse_number::<u8>("255", &format), Some(255));
        assert_eq!(parse_number::<u8>("256", &format), None);
        assert_eq!(parse_number::<u32>("-1", &format), None);
        assert_eq!(parse_number::<i64>("1.5", &format), None);
        assert_eq!(parse_number::<i16>("abc", &format), None);
        assert_eq!(parse_number::<i16>("", &format), None);
    }

    #[test]
    fn it_parses_floats_with_number_format() {
        let invariant = NumberFormat::default();
        assert_eq!(parse_number::<f64>("1.5", &invariant), Some(1.5));
        assert_eq!(parse_number::<f32>("-0.25", &invariant), Some(-0.25));
        assert_eq!(parse_number::<f64>("1,5", &invariant), None);

        let european = NumberFormat::new(',', Some('.'));
        assert_eq!(parse_number::<f64>("1,5", &european), Some(1.5));
        assert_eq!(parse_number::<f64>("1.234,5", &european), Some(1234.5));
        assert_eq!(parse_number::<i32>("1234", &european), Some(1234));

        let no_group = NumberFormat::new(',', None);
        assert_eq!(parse_number::<f64>("1.5", &no_group), None);
        assert_eq!(parse_number::<f64>("2,75", &no_group), Some(2.75));
    }
}
