use std::{env, fs, process::Command};
use vouch_core::config::{CONFIG_ENV_VAR, Settings};

const TEST_NAME: &str = "it_loads_settings_named_by_env_var";

const CONFIG: &str = r#"
[validation]
decimal-separator = ","
date-time-format = "%d.%m.%Y"

[tracing]
filter = "warn"
ansi = false
"#;

/// Runs the test again in a child process with the config variable set.
fn run_with_config_file(config_file: impl AsRef<std::ffi::OsStr>) -> String {
    let output = Command::new(env::current_exe().unwrap())
        .args([TEST_NAME, "--exact", "--test-threads=1"])
        .env(CONFIG_ENV_VAR, config_file)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    assert!(output.status.success(), "{stdout}");
    stdout
}

#[test]
fn it_loads_settings_named_by_env_var() {
    if let Some(config_file) = env::var_os(CONFIG_ENV_VAR) {
        let settings = Settings::from_env();
        assert_eq!(Settings::shared(), &settings);
        if fs::metadata(&config_file).is_err() {
            assert_eq!(settings, Settings::default());
            return;
        }
        assert_eq!(settings.number_format().decimal_separator, ',');
        assert_eq!(settings.date_time_format(), "%d.%m.%Y");
        assert_eq!(settings.tracing().filter, "warn");
        assert!(!settings.tracing().ansi);
        return;
    }

    assert_eq!(Settings::from_env(), Settings::default());

    let config_file = env::temp_dir().join(format!("vouch-{}.toml", std::process::id()));
    fs::write(&config_file, CONFIG).unwrap();
    let stdout = run_with_config_file(&config_file);
    fs::remove_file(&config_file).unwrap();
    assert!(stdout.contains("1 passed"), "{stdout}");
}

#[test]
fn it_falls_back_to_defaults_for_unreadable_files() {
    let stdout = run_with_config_file("/nonexistent/vouch.toml");
    assert!(stdout.contains("1 passed"), "{stdout}");
}
