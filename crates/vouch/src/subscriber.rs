use tracing_subscriber::filter::EnvFilter;
use vouch_core::config::Settings;

/// Installs a global `fmt` subscriber configured by the shared [`Settings`].
///
/// Filter directives are read from `RUST_LOG` and fall back to the
/// `tracing.filter` setting. Returns `false` if a global subscriber has
/// already been set.
pub fn init_tracing() -> bool {
    let config = Settings::shared().tracing();
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|err| {
            let filter = &config.filter;
            tracing::warn!("fail to parse the filter `{filter}`: {err}");
            EnvFilter::new("info")
        });
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(config.ansi)
        .with_target(config.display_target)
        .with_file(config.display_filename)
        .with_line_number(config.display_line_number)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        tracing::warn!("fail to set the default subscriber: {err}");
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::init_tracing;

    #[test]
    fn it_installs_the_subscriber_once() {
        assert!(init_tracing());
        assert!(tracing::dispatcher::has_been_set());
        assert!(!init_tracing());
    }
}
