//! `tracing` subscriber setup.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Layer, Registry};

use crate::config::LoggingConfig;

/// Where formatted log lines end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    File(PathBuf),
    Stderr,
    /// Events are filtered but never written
    Discard,
}

impl LogSink {
    /// A configured file always wins. Without one, headless runs use stderr
    /// and the terminal UI discards, since stderr shares its screen.
    pub fn choose(config: &LoggingConfig, headless: bool) -> Self {
        match &config.file {
            Some(path) => LogSink::File(path.clone()),
            None if headless => LogSink::Stderr,
            None => LogSink::Discard,
        }
    }
}

/// Build the level filter: `RUST_LOG` wins, then the configured directive,
/// then `warn`.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(from_env.as_deref(), &config.filter)
}

/// Like [`env_filter`] with the environment value passed in. Invalid
/// directives fall through to the next source.
pub fn filter_from(env: Option<&str>, configured: &str) -> EnvFilter {
    env.and_then(|dirs| EnvFilter::try_new(dirs).ok())
        .or_else(|| EnvFilter::try_new(configured).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

/// Assemble the subscriber for `sink` without installing it.
pub fn subscriber(
    sink: &LogSink,
    filter: EnvFilter,
) -> io::Result<impl Subscriber + Send + Sync + 'static> {
    let output: Option<Box<dyn Layer<Registry> + Send + Sync>> = match sink {
        LogSink::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .boxed(),
            )
        }
        LogSink::Stderr => Some(fmt::layer().with_writer(io::stderr).boxed()),
        LogSink::Discard => None,
    };

    Ok(tracing_subscriber::registry().with(output).with(filter))
}

/// Install the global subscriber.
pub fn init(config: &LoggingConfig, headless: bool) -> io::Result<()> {
    let sink = LogSink::choose(config, headless);
    subscriber(&sink, env_filter(config))?.init();

    if let LogSink::File(path) = &sink {
        tracing::info!(path = %path.display(), "Logging initialized");
    }
    Ok(())
}
