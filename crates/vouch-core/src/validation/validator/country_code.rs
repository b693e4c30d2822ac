use super::Validator;
use std::fmt;

/// A validator for the ISO 3166-1 alpha-2 country code.
///
/// The comparison is case-insensitive. Having two letters is not enough:
/// the code has to be officially assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryCodeValidator;

/// An error for the country code validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCountryCode(String);

impl InvalidCountryCode {
    /// Returns the rejected value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvalidCountryCode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = &self.0;
        write!(f, "`{value}` is not an assigned ISO 3166-1 alpha-2 code")
    }
}

impl std::error::Error for InvalidCountryCode {}

impl Validator<str> for CountryCodeValidator {
    type Error = InvalidCountryCode;

    #[inline]
    fn validate(&self, data: &str) -> Result<(), Self::Error> {
        if is_country_code(data) {
            Ok(())
        } else {
            Err(InvalidCountryCode(data.to_owned()))
        }
    }
}

/// Returns `true` if the value case-insensitively matches an assigned alpha-2 code.
pub fn is_country_code(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 2 || !bytes.iter().all(|b| b.is_ascii_alphabetic()) {
        return false;
    }

    let code = [bytes[0].to_ascii_uppercase(), bytes[1].to_ascii_uppercase()];
    COUNTRY_CODES
        .binary_search_by(|entry| entry.as_bytes().cmp(&code[..]))
        .is_ok()
}

/// Officially assigned ISO 3166-1 alpha-2 codes in ascending order.
pub const COUNTRY_CODES: [&str; 249] = [
    "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT", "AU", "AW", "AX", "AZ",
    "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL", "BM", "BN", "BO", "BQ", "BR", "BS",
    "BT", "BV", "BW", "BY", "BZ", "CA", "CC", "CD", "CF", "CG", "CH", "CI", "CK", "CL", "CM", "CN",
    "CO", "CR", "CU", "CV", "CW", "CX", "CY", "CZ", "DE", "DJ", "DK", "DM", "DO", "DZ", "EC", "EE",
    "EG", "EH", "ER", "ES", "ET", "FI", "FJ", "FK", "FM", "FO", "FR", "GA", "GB", "GD", "GE", "GF",
    "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS", "GT", "GU", "GW", "GY", "HK", "HM",
    "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IM", "IN", "IO", "IQ", "IR", "IS", "IT", "JE", "JM",
    "JO", "JP", "KE", "KG", "KH", "KI", "KM", "KN", "KP", "KR", "KW", "KY", "KZ", "LA", "LB", "LC",
    "LI", "LK", "LR", "LS", "LT", "LU", "LV", "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH", "MK",
    "ML", "MM", "MN", "MO", "MP", "MQ", "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA",
    "NC", "NE", "NF", "NG", "NI", "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PA", "PE", "PF", "PG",
    "PH", "PK", "PL", "PM", "PN", "PR", "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW",
    "SA", "SB", "SC", "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO", "SR", "SS",
    "ST", "SV", "SX", "SY", "SZ", "TC", "TD", "TF", "TG", "TH", "TJ", "TK", "TL", "TM", "TN", "TO",
    "TR", "TT", "TV", "TW", "TZ", "UA", "UG", "UM", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI",
    "VN", "VU", "WF", "WS", "YE", "YT", "ZA", "ZM", "ZW",
];

#[cfg(test)]
mod tests {
    use super::{COUNTRY_CODES, CountryCodeValidator, Validator, is_country_code};

    #[test]
    fn it_keeps_codes_sorted() {
        assert!(COUNTRY_CODES.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn it_validates_country_codes() {
        assert!(is_country_code("PT"));
        assert!(is_country_code("pt"));
        assert!(is_country_code("Us"));
        assert!(is_country_code("AD"));
        assert!(is_country_code("ZW"));

        assert!(!is_country_code("ptr"));
        assert!(!is_country_code("xx"));
        assert!(!is_country_code("UK"));
        assert!(!is_country_code(""));
        assert!(!is_country_code("P"));
        assert!(!is_country_code("P1"));
        assert!(!is_country_code(" PT"));

        let err = CountryCodeValidator.validate("xx").unwrap_err();
        assert_eq!(err.value(), "xx");
    }
}
