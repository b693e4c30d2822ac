use toml::Table;

/// Extension trait for [`Table`](toml::Table).
pub trait TomlTableExt {
    /// Extracts the boolean value corresponding to the key.
    fn get_bool(&self, key: &str) -> Option<bool>;

    /// Extracts the string corresponding to the key.
    fn get_str(&self, key: &str) -> Option<&str>;

    /// Extracts the string corresponding to the key and
    /// represents it as `char` if it has exactly one character.
    fn get_char(&self, key: &str) -> Option<char>;

    /// Extracts the table corresponding to the key.
    fn get_table(&self, key: &str) -> Option<&Table>;
}

impl TomlTableExt for Table {
    #[inline]
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| v.as_bool())
    }

    #[inline]
    fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_str())
    }

    fn get_char(&self, key: &str) -> Option<char> {
        let mut chars = self.get_str(key)?.chars();
        let ch = chars.next()?;
        chars.next().is_none().then_some(ch)
    }

    #[inline]
    fn get_table(&self, key: &str) -> Option<&Table> {
        self.get(key).and_then(|v| v.as_table())
    }
}

#[cfg(test)]
mod tests {
    use super::TomlTableExt;
    use toml::Table;

    #[test]
    fn it_extracts_toml_values() {
        let table: Table = r#"
            [validation]
            decimal-separator = ","
            date-time-format = "%d/%m/%Y %H:%M"
            strict = true
            group-separator = ".."
        "#
        .parse()
        .unwrap();
        let config = table.get_table("validation").unwrap();
        assert_eq!(config.get_char("decimal-separator"), Some(','));
        assert_eq!(config.get_char("group-separator"), None);
        assert_eq!(config.get_str("date-time-format"), Some("%d/%m/%Y %H:%M"));
        assert_eq!(config.get_bool("strict"), Some(true));
        assert_eq!(config.get_bool("missing"), None);
    }
}
