use super::{ValidationContext, default_error};
use crate::{
    code,
    config::Settings,
    convert::{self, InvalidTypeError, Numeric},
    error::ValidationError,
    message,
    value::TextValue,
};
use chrono::{DateTime, Utc};

impl<'a, T: TextValue> ValidationContext<'a, T> {
    /// Converts the text into a number and carries it forward.
    ///
    /// On failure the value becomes `N::default()` and an `INVALID` error is appended.
    /// Floating-point types follow the configured number format.
    #[inline]
    pub fn to_number<N: Numeric>(self) -> ValidationContext<'a, N> {
        self.to_number_with(|p| default_error(p, code::INVALID, message::is_invalid(p)))
    }

    /// Converts the text into a number, building the error with `factory` on failure.
    pub fn to_number_with<N: Numeric>(
        self,
        factory: impl FnOnce(&str) -> ValidationError,
    ) -> ValidationContext<'a, N> {
        let number_format = Settings::shared().number_format();
        self.convert_with(
            |text| convert::parse_number::<N>(text, number_format),
            factory,
        )
    }

    /// Converts the text into a number and also writes it into `number`.
    #[inline]
    pub fn to_number_into<N: Numeric>(self, number: &mut N) -> ValidationContext<'a, N> {
        let context = self.to_number::<N>();
        *number = context.value;
        context
    }

    /// Converts the text into a UTC date and time with the configured format.
    ///
    /// On failure the value becomes the UNIX epoch and an `INVALID` error is appended.
    #[inline]
    pub fn to_date_time(self) -> ValidationContext<'a, DateTime<Utc>> {
        self.to_date_time_in_format(Settings::shared().date_time_format())
    }

    /// Converts the text into a UTC date and time with the format string.
    #[inline]
    pub fn to_date_time_in_format(self, format: &str) -> ValidationContext<'a, DateTime<Utc>> {
        self.convert_with(
            |text| convert::parse_date_time(text, format),
            |p| default_error(p, code::INVALID, message::is_invalid(p)),
        )
    }

    /// Converts the text into a UTC date and time, building the error with `factory` on failure.
    pub fn to_date_time_with(
        self,
        factory: impl FnOnce(&str) -> ValidationError,
    ) -> ValidationContext<'a, DateTime<Utc>> {
        let format = Settings::shared().date_time_format();
        self.convert_with(|text| convert::parse_date_time(text, format), factory)
    }

    /// Converts the text into a UTC date and time and also writes it into `date_time`.
    #[inline]
    pub fn to_date_time_into(
        self,
        date_time: &mut DateTime<Utc>,
    ) -> ValidationContext<'a, DateTime<Utc>> {
        let context = self.to_date_time();
        *date_time = context.value;
        context
    }

    /// Converts the text into a value of type `V` selected at run time.
    ///
    /// # Panics
    ///
    /// Panics with `Invalid type '<V>'` if `V` is neither a supported number type
    /// nor `DateTime<Utc>`. Use [`to_number`](Self::to_number) to have the
    /// compiler reject unsupported types instead.
    pub fn convert<V: Default + 'static>(self) -> ValidationContext<'a, V> {
        match self.try_convert::<V>() {
            Ok(context) => context,
            Err(err) => {
                tracing::error!(type_name = err.type_name(), "unsupported conversion target");
                panic!("{err}");
            }
        }
    }

    /// Converts the text into a value of type `V` selected at run time,
    /// returning an error if `V` is not supported.
    pub fn try_convert<V: Default + 'static>(
        self,
    ) -> Result<ValidationContext<'a, V>, InvalidTypeError> {
        let converted = convert::convert_text::<V>(self.value.as_text(), Settings::shared())?;
        let failed = converted.is_none();
        let context = self.replace(converted.unwrap_or_default());
        Ok(context.check_with(failed, |p| {
            default_error(p, code::INVALID, message::is_invalid(p))
        }))
    }

    /// Replaces the text with the parsed value, or the default value on failure.
    fn convert_with<V: Default>(
        self,
        parse: impl FnOnce(&str) -> Option<V>,
        factory: impl FnOnce(&str) -> ValidationError,
    ) -> ValidationContext<'a, V> {
        let converted = self.value.as_text().and_then(parse);
        let failed = converted.is_none();
        self.replace(converted.unwrap_or_default())
            .check_with(failed, factory)
    }
}

#[cfg(test)]
mod tests {
    use crate::{ValidationContext, ValidationError, code};
    use chrono::{DateTime, TimeZone, Utc};

    #[test]
    fn it_converts_numbers() {
        let mut age = 0u8;
        let context = ValidationContext::new("42", "age").to_number_into(&mut age);
        assert!(context.is_valid());
        assert_eq!(age, 42);

        let context = ValidationContext::new("4.2", "age").to_number::<i32>();
        assert_eq!(*context.value(), 0);
        let error = context.into_error().unwrap();
        assert_eq!(error.code(), code::INVALID);
        assert_eq!(error.description(), "The 'age' is an invalid");

        let context = ValidationContext::new(Some("0.75"), "ratio").to_number::<f64>();
        assert_eq!(*context.value(), 0.75);
        assert!(context.is_valid());
    }

    #[test]
    fn it_treats_null_sources_as_conversion_failures() {
        let context = ValidationContext::new(None::<String>, "amount").to_number::<u32>();
        assert_eq!(*context.value(), 0);
        assert_eq!(context.own_errors().len(), 1);
    }

    #[test]
    fn it_chains_rules_after_failed_conversions() {
        let context = ValidationContext::new("fake", "starts_at")
            .to_date_time()
            .if_less_than_utc_now();
        assert_eq!(*context.value(), DateTime::<Utc>::default());
        let codes = context.errors().iter().map(|e| e.code()).collect::<Vec<_>>();
        assert_eq!(codes, vec![code::INVALID, code::MIN_DATETIME_UTCNOW]);
    }

    #[test]
    fn it_converts_date_times() {
        let mut starts_at = DateTime::<Utc>::default();
        let context = ValidationContext::new("2030-01-02 03:04:05", "starts_at")
            .to_date_time_into(&mut starts_at)
            .if_less_than_utc_now();
        assert!(context.is_valid());
        assert_eq!(starts_at, Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).unwrap());

        let context = ValidationContext::new("02/01/2030", "starts_at")
            .to_date_time_in_format("%d/%m/%Y");
        assert!(context.is_valid());
        assert_eq!(*context.value(), Utc.with_ymd_and_hms(2030, 1, 2, 0, 0, 0).unwrap());

        let context = ValidationContext::new("2030/01/02", "starts_at")
            .to_date_time_in_format("%d/%m/%Y");
        assert!(!context.is_valid());
        assert_eq!(*context.value(), DateTime::<Utc>::default());

        let context = ValidationContext::new("bad", "starts_at")
            .to_date_time_with(|p| ValidationError::conflict(p.to_owned(), "DATE", "bad date"));
        assert_eq!(context.into_error().map(|e| e.code().to_owned()), Some("DATE".to_owned()));
    }

    #[test]
    fn it_converts_by_runtime_type() {
        let context = ValidationContext::new("-12", "offset").convert::<i16>();
        assert_eq!(*context.value(), -12);

        let context = ValidationContext::new("x", "offset").convert::<u64>();
        assert_eq!(*context.value(), 0);
        assert!(!context.is_valid());

        let err = ValidationContext::new("true", "flag").try_convert::<bool>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid type 'bool'");
    }

    #[test]
    #[should_panic(expected = "Invalid type")]
    fn it_panics_on_unsupported_types() {
        ValidationContext::new("true", "flag").convert::<bool>();
    }
}
