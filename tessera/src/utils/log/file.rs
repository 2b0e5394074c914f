use std::path::PathBuf;
use tracing::Subscriber;
use tracing_subscriber::{layer::SubscriberExt, registry::LookupSpan};

const LOG_DIR: &str = "~/.cache/tessera";
const LOG_FILE_NAME: &str = "log.log";

/// Add a layer appending to `~/.cache/tessera/log.log`. When the directory
/// cannot be created the subscriber is returned without it.
pub fn add_layer<S>(subscriber: S) -> impl Subscriber + for<'span> LookupSpan<'span> + Send + Sync
where
    S: Subscriber + for<'span> LookupSpan<'span> + Send + Sync,
{
    let dir = PathBuf::from(shellexpand::tilde(LOG_DIR).as_ref());
    let layer = match std::fs::create_dir_all(&dir) {
        Ok(()) => {
            let writer = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(writer),
            )
        }
        Err(err) => {
            eprintln!("Couldn't create log directory {}: {err}", dir.display());
            None
        }
    };
    subscriber.with(layer)
}
