use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{
    filter::ParseError, layer::SubscriberExt, registry::LookupSpan, EnvFilter,
};

#[cfg(feature = "file-log")]
pub mod file;

/// Build the filter from a `log_level` directive string.
///
/// An invalid directive falls back to `info` and hands back the parse error.
#[must_use]
#[allow(clippy::missing_panics_doc)]
pub fn parse_log_level(level: &str) -> (EnvFilter, Option<ParseError>) {
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse(level)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::new("info")
        });
    (filter, parse_err)
}

#[allow(clippy::let_and_return)]
pub fn get_subscribers(
    filter: EnvFilter,
) -> impl Subscriber + for<'span> LookupSpan<'span> + Send + Sync {
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    #[cfg(feature = "file-log")]
    let subscriber = file::add_layer(subscriber);

    subscriber
}

/// Install the global subscriber for `level`.
///
/// # Errors
///
/// Errors if a global subscriber was already set.
pub fn setup_logging(level: &str) -> anyhow::Result<()> {
    let (filter, parse_err) = parse_log_level(level);
    tracing::subscriber::set_global_default(get_subscribers(filter))?;
    if let Some(err) = parse_err {
        tracing::warn!("Invalid log_level {:?}, using info: {}", level, err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_level_parses() {
        let (_, err) = parse_log_level("warn,tessera=debug");
        assert!(err.is_none());
    }

    #[test]
    fn invalid_level_falls_back() {
        let (filter, err) = parse_log_level("tessera=loud");
        assert!(err.is_some());
        assert_eq!(filter.to_string(), "info");
    }
}
