use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Writes `timestamp [LEVEL] [thread] file:line - message` lines to stdout.
pub struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let thread = std::thread::current();
        let thread = match thread.name() {
            Some(name) => name.to_string(),
            None => format!("{:?}", thread.id()),
        };

        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(
            stdout,
            "{} [{}] [{}] {}:{} - {}",
            format_timestamp(),
            record.level(),
            thread,
            record.file().unwrap_or("unknown"),
            record.line().unwrap_or(0),
            record.args()
        );
    }

    fn flush(&self) {
        std::io::stdout().flush().ok();
    }
}

/// Local wall-clock time as `YYYY-MM-DDTHH:MM:SS`, the same clock sample names use.
pub fn format_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Initialize the global logger with StdoutLogger
///
/// Sets the max level based on build mode:
/// - Debug builds: LevelFilter::Debug (all levels active)
/// - Release builds: LevelFilter::Info (Debug suppressed)
///
/// This can only be called once per process. Subsequent calls are silently ignored.
pub fn init_stdout_logger() {
    static LOGGER: StdoutLogger = StdoutLogger;

    let max_level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(max_level);
    }
}

/// Log a fatal error and exit the process
///
/// Logs at Error level (since the log crate has no Fatal level),
/// flushes stdout, and calls std::process::exit(1).
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)*) => {{
        $crate::log::error!($($arg)*);
        {
            use std::io::Write;
            let _ = std::io::stdout().flush();
        }
        std::process::exit(1);
    }};
}
