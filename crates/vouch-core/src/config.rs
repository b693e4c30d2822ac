//! Process-wide settings for conversions and default formats.
//!
//! Settings are read from a TOML document:
//!
//! ```toml
//! [validation]
//! decimal-separator = ","
//! group-separator = "."
//! date-time-format = "%Y-%m-%d %H:%M:%S"
//! card-expiry-format = "yy/MM"
//!
//! [tracing]
//! filter = "info,vouch_core=debug"
//! ```
use crate::{
    convert::NumberFormat, extension::TomlTableExt, validation::CardExpiryDateValidator,
};
use std::{env, fmt, fs, io, path::Path, sync::OnceLock};
use toml::Table;

/// Default format of [`to_date_time`](crate::ValidationContext::to_date_time).
pub const DEFAULT_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Environment variable naming the config file loaded by [`Settings::shared()`].
pub const CONFIG_ENV_VAR: &str = "VOUCH_CONFIG";

/// Settings for the tracing subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingSettings {
    /// Directives used when `RUST_LOG` is not set.
    pub filter: String,
    /// Whether the event target is displayed.
    pub display_target: bool,
    /// Whether the source file name is displayed.
    pub display_filename: bool,
    /// Whether the source line number is displayed.
    pub display_line_number: bool,
    /// Whether ANSI colors are enabled.
    pub ansi: bool,
}

impl Default for TracingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
            display_target: true,
            display_filename: false,
            display_line_number: false,
            ansi: true,
        }
    }
}

/// Conversion and formatting settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Number format applied to floating-point conversions.
    number_format: NumberFormat,
    /// Format string of date-time conversions.
    date_time_format: String,
    /// Default format string of card expiry dates.
    card_expiry_format: String,
    /// Tracing subscriber settings.
    tracing: TracingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            number_format: NumberFormat::default(),
            date_time_format: DEFAULT_DATE_TIME_FORMAT.to_owned(),
            card_expiry_format: CardExpiryDateValidator::DEFAULT_FORMAT.to_owned(),
            tracing: TracingSettings::default(),
        }
    }
}

impl Settings {
    /// Creates settings from a TOML table, falling back to defaults for missing keys.
    pub fn from_table(table: &Table) -> Result<Self, ConfigError> {
        let mut settings = Self::default();
        if let Some(config) = table.get_table("validation") {
            if config.contains_key("decimal-separator") {
                settings.number_format.decimal_separator = config
                    .get_char("decimal-separator")
                    .ok_or_else(|| ConfigError::invalid_value(config, "decimal-separator"))?;
            }
            if config.contains_key("group-separator") {
                let group_separator = config
                    .get_char("group-separator")
                    .filter(|&ch| ch != settings.number_format.decimal_separator)
                    .ok_or_else(|| ConfigError::invalid_value(config, "group-separator"))?;
                settings.number_format.group_separator = Some(group_separator);
            }
            if let Some(format) = config.get_str("date-time-format") {
                settings.date_time_format = format.to_owned();
            }
            if let Some(format) = config.get_str("card-expiry-format") {
                settings.card_expiry_format = format.to_owned();
            }
        }
        if let Some(config) = table.get_table("tracing") {
            let tracing = &mut settings.tracing;
            if let Some(filter) = config.get_str("filter") {
                tracing.filter = filter.to_owned();
            }
            if let Some(display_target) = config.get_bool("display-target") {
                tracing.display_target = display_target;
            }
            if let Some(display_filename) = config.get_bool("display-filename") {
                tracing.display_filename = display_filename;
            }
            if let Some(display_line_number) = config.get_bool("display-line-number") {
                tracing.display_line_number = display_line_number;
            }
            if let Some(ansi) = config.get_bool("ansi") {
                tracing.ansi = ansi;
            }
        }
        Ok(settings)
    }

    /// Loads settings from a TOML file.
    pub fn load(config_file: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config_file = config_file.as_ref();
        let data = fs::read_to_string(config_file)?;
        let table = data.parse::<Table>()?;
        let settings = Self::from_table(&table)?;
        if let Some(file_name) = config_file.file_name().and_then(|s| s.to_str()) {
            tracing::info!("`{file_name}` loaded");
        }
        Ok(settings)
    }

    /// Creates settings from the file named by the `VOUCH_CONFIG` environment variable.
    /// Defaults are used if the variable is unset or the file can not be loaded.
    pub fn from_env() -> Self {
        let Ok(config_file) = env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        Self::load(&config_file).unwrap_or_else(|err| {
            tracing::warn!("fail to load the config file `{config_file}`: {err}");
            Self::default()
        })
    }

    /// Installs the shared settings. Returns `false` if they have already been initialized.
    pub fn init(settings: Self) -> bool {
        let initialized = SHARED_SETTINGS.set(settings).is_ok();
        if !initialized {
            tracing::warn!("the shared settings have already been initialized");
        }
        initialized
    }

    /// Returns a reference to the shared settings.
    #[inline]
    pub fn shared() -> &'static Self {
        SHARED_SETTINGS.get_or_init(Self::from_env)
    }

    /// Sets the number format.
    #[inline]
    pub fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }

    /// Sets the date-time format.
    #[inline]
    pub fn with_date_time_format(mut self, format: impl Into<String>) -> Self {
        self.date_time_format = format.into();
        self
    }

    /// Sets the default card expiry format.
    #[inline]
    pub fn with_card_expiry_format(mut self, format: impl Into<String>) -> Self {
        self.card_expiry_format = format.into();
        self
    }

    /// Returns the number format.
    #[inline]
    pub fn number_format(&self) -> &NumberFormat {
        &self.number_format
    }

    /// Returns the date-time format.
    #[inline]
    pub fn date_time_format(&self) -> &str {
        &self.date_time_format
    }

    /// Returns the default card expiry format.
    #[inline]
    pub fn card_expiry_format(&self) -> &str {
        &self.card_expiry_format
    }

    /// Returns the tracing settings.
    #[inline]
    pub fn tracing(&self) -> &TracingSettings {
        &self.tracing
    }
}

/// Shared settings.
static SHARED_SETTINGS: OnceLock<Settings> = OnceLock::new();

/// An error for loading the settings.
#[derive(Debug)]
pub enum ConfigError {
    /// The config file can not be read.
    Io(io::Error),
    /// The config file is not valid TOML.
    Parse(toml::de::Error),
    /// A key has an unexpected value.
    InvalidValue {
        /// The key.
        key: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl ConfigError {
    fn invalid_value(config: &Table, key: &'static str) -> Self {
        let value = config
            .get(key)
            .map(|v| v.as_str().map(|s| s.to_owned()).unwrap_or_else(|| format!("{v:?}")))
            .unwrap_or_default();
        Self::InvalidValue { key, value }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "fail to read the config file: {err}"),
            Self::Parse(err) => write!(f, "fail to parse the config file: {err}"),
            Self::InvalidValue { key, value } => {
                write!(f, "invalid value `{value}` for the key `{key}`")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::InvalidValue { .. } => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    #[inline]
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    #[inline]
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err)
    }
}
