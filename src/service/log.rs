use std::io;

use time::format_description::OwnedFormatItem;
use time::macros::{format_description, offset};
use tracing::{warn, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LogConfig;

const LOG_FILE_NAME: &str = "lotto_sim.log";

/// Installs the global subscriber. Logs go to stderr so they never mix with
/// the game output, and to daily rolling files when a directory is set.
///
/// Keep the returned guards alive until exit, dropping them flushes the
/// writers.
pub fn init_logger(config: &LogConfig) -> Vec<WorkerGuard> {
    let mut guards = Vec::with_capacity(2);
    let level = config.max_level.as_tracing_level();

    let (time_format, format_err) =
        match time::format_description::parse_owned::<1>(&config.time_format) {
            Ok(f) => (f, None),
            Err(e) => (
                OwnedFormatItem::from(format_description!(
                    "[year]-[month]-[day] [hour]:[minute]:[second]"
                )),
                Some(e),
            ),
        };

    let (offset, offset_err) = match time::UtcOffset::current_local_offset() {
        Ok(ofs) => (ofs, None),
        Err(e) => (offset!(+8), Some(e)),
    };
    let timer = OffsetTime::new(offset, time_format);

    let (s, s_guard) = tracing_appender::non_blocking(io::stderr());
    guards.push(s_guard);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(s.with_max_level(level))
        .with_timer(timer.clone());

    let file_layer = config.directory.as_ref().map(|dir| {
        let file_writer = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
        let (f, f_guard) = tracing_appender::non_blocking(file_writer);
        guards.push(f_guard);

        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_ansi(false)
            .with_writer(f.with_max_level(level.max(Level::INFO)))
            .with_timer(timer)
    });

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(e) = format_err {
        warn!(
            "Invalid log time format '{}': {}, using the default",
            config.time_format, e
        );
    }
    if let Some(e) = offset_err {
        warn!("Cannot get local time offset: {}, using UTC+8", e);
    }

    guards
}
