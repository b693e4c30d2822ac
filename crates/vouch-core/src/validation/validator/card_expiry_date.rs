use self::InvalidExpiryDate::*;
use super::Validator;
use chrono::{Datelike, NaiveDate, Utc};
use std::fmt;

/// A validator for the card expiry date.
///
/// The format string is made of the tokens `yyyy`, `yy`, `MM` and `M`;
/// any other character must appear literally. Two-digit years fall in the
/// century window ending at [`TWO_DIGIT_YEAR_MAX`](Self::TWO_DIGIT_YEAR_MAX),
/// so `49` is read as 2049 and `50` as 1950. A card is valid through the whole
/// expiry month, so only months before the current one are expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardExpiryDateValidator<'a> {
    /// Format string.
    format: &'a str,
    /// Reference date. Defaults to the current UTC date.
    today: Option<NaiveDate>,
}

impl<'a> CardExpiryDateValidator<'a> {
    /// Default format string.
    pub const DEFAULT_FORMAT: &'static str = "yy/MM";

    /// Last year of the century window for two-digit years.
    pub const TWO_DIGIT_YEAR_MAX: i32 = 2049;

    /// Creates a new instance with the format string.
    #[inline]
    pub fn new(format: &'a str) -> Self {
        Self {
            format,
            today: None,
        }
    }

    /// Evaluates the expiration against the supplied date instead of the current UTC date.
    #[inline]
    pub fn at(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Returns the format string.
    #[inline]
    pub fn format(&self) -> &'a str {
        self.format
    }

    /// Parses the data as the first day of the expiry month.
    pub fn parse(&self, data: &str) -> Result<NaiveDate, InvalidExpiryDate> {
        let ExpiryDate { year, month } = ExpiryDate::parse(data, self.format).ok_or(Malformed)?;
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(Malformed)
    }

    /// Returns the first day of the current month.
    fn start_of_current_month(&self) -> NaiveDate {
        let today = self.today.unwrap_or_else(|| Utc::now().date_naive());
        today.with_day(1).unwrap_or(today)
    }
}

impl Default for CardExpiryDateValidator<'_> {
    #[inline]
    fn default() -> Self {
        Self::new(Self::DEFAULT_FORMAT)
    }
}

/// An error for the card expiry date validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidExpiryDate {
    /// The value does not match the format.
    Malformed,
    /// The expiry month is before the current month.
    Expired,
}

impl fmt::Display for InvalidExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Malformed => write!(f, "value does not match the expiry date format"),
            Expired => write!(f, "the expiry month is before the current month"),
        }
    }
}

impl std::error::Error for InvalidExpiryDate {}

impl Validator<str> for CardExpiryDateValidator<'_> {
    type Error = InvalidExpiryDate;

    fn validate(&self, data: &str) -> Result<(), Self::Error> {
        let expiry_date = self.parse(data)?;
        if expiry_date < self.start_of_current_month() {
            return Err(Expired);
        }
        Ok(())
    }
}

/// Year and month parsed from an expiry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ExpiryDate {
    year: i32,
    month: u32,
}

impl ExpiryDate {
    fn parse(data: &str, format: &str) -> Option<Self> {
        let mut input = data;
        let mut year = None;
        let mut month = None;
        let mut tokens = format.chars().peekable();
        while let Some(ch) = tokens.next() {
            let mut width = 1;
            while tokens.next_if_eq(&ch).is_some() {
                width += 1;
            }
            match (ch, width) {
                ('y', 4) => {
                    year = Some(take_digits(&mut input, 4, 4)? as i32);
                }
                ('y', 2) => {
                    year = Some(expand_two_digit_year(take_digits(&mut input, 2, 2)? as i32));
                }
                ('M', 2) => {
                    month = Some(take_digits(&mut input, 2, 2)?);
                }
                ('M', 1) => {
                    month = Some(take_digits(&mut input, 1, 2)?);
                }
                ('y' | 'M', _) => return None,
                _ => {
                    for _ in 0..width {
                        input = input.strip_prefix(ch)?;
                    }
                }
            }
        }
        if !input.is_empty() {
            return None;
        }

        let year = year?;
        let month = month.filter(|month| (1..=12).contains(month))?;
        Some(Self { year, month })
    }
}

/// Maps a two-digit year into the window ending at `TWO_DIGIT_YEAR_MAX`.
fn expand_two_digit_year(year: i32) -> i32 {
    let max = CardExpiryDateValidator::TWO_DIGIT_YEAR_MAX;
    let year = max / 100 * 100 + year;
    if year > max { year - 100 } else { year }
}

/// Consumes between `min` and `max` leading ASCII digits.
fn take_digits(input: &mut &str, min: usize, max: usize) -> Option<u32> {
    let len = input
        .bytes()
        .take(max)
        .take_while(|b| b.is_ascii_digit())
        .count();
    if len < min {
        return None;
    }

    let (digits, rest) = input.split_at(len);
    *input = rest;
    digits.parse().ok()
}
