//! Default error codes used by the built-in rules.

/// The value is absent or empty.
pub const REQUIRED: &str = "REQUIRED";

/// The value has an invalid format or fails a comparison.
pub const INVALID: &str = "INVALID";

/// The card expiry date is before the current month.
pub const MIN_CURRENT_MONTH: &str = "MIN:CURRENT_MONTH";

/// The date and time is before the current UTC instant.
pub const MIN_DATETIME_UTCNOW: &str = "MIN_DATETIME_UTCNOW";

/// The date and time is after the current UTC instant.
pub const MAX_DATETIME_UTCNOW: &str = "MAX_DATETIME_UTCNOW";
