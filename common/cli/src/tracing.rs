use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use tracing::trace;
use tracing_log::AsTrace;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

/// Console logging goes to stderr, at the verbosity given, so that stdout only has command output.
///
/// When a trace file is given, everything is also written to it, at the `TRACE` level.
pub fn configure_tracing(trace: Option<PathBuf>, verbosity: Verbosity<InfoLevel>) -> anyhow::Result<()> {
    let console_level = verbosity.log_level_filter().as_trace();

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(console_level);

    let trace_layer = match &trace {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Unable to create trace log. path: {}", path.display()))?;

            let layer = fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_filter(LevelFilter::TRACE);

            Some(layer)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(trace_layer)
        .try_init()?;

    if let Some(path) = trace {
        trace!("Tracing to file. path: {}", path.display());
    }

    Ok(())
}
