// Wed Oct 14 2026 - Alex

use colored::*;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::atomic::{AtomicBool, Ordering};

pub struct LoggingUtils;

impl LoggingUtils {
    pub fn init_logger(level: LevelFilter, use_color: bool) {
        let logger = Box::new(ColoredLogger::new(level, use_color));
        log::set_boxed_logger(logger).ok();
        log::set_max_level(level);
    }

    /// Defers to `env_logger` when `RUST_LOG` is set.
    pub fn init(level: LevelFilter, use_color: bool) {
        if std::env::var_os("RUST_LOG").is_some() {
            env_logger::try_init().ok();
        } else {
            Self::init_logger(level, use_color);
        }
    }

    pub fn level_from_str(s: &str) -> LevelFilter {
        match s.to_lowercase().as_str() {
            "error" => LevelFilter::Error,
            "warn" | "warning" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Warn,
        }
    }

    pub fn level_from_verbosity(verbosity: u8) -> LevelFilter {
        match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

struct ColoredLogger {
    level: LevelFilter,
    use_color: AtomicBool,
}

impl ColoredLogger {
    fn new(level: LevelFilter, use_color: bool) -> Self {
        Self {
            level,
            use_color: AtomicBool::new(use_color),
        }
    }

    fn format_level(&self, level: Level) -> ColoredString {
        match level {
            Level::Error => "ERROR".red().bold(),
            Level::Warn => "WARN ".yellow().bold(),
            Level::Info => "INFO ".green().bold(),
            Level::Debug => "DEBUG".blue().bold(),
            Level::Trace => "TRACE".magenta().bold(),
        }
    }
}

impl Log for ColoredLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let use_color = self.use_color.load(Ordering::Relaxed);
            let level_str = if use_color {
                self.format_level(record.level()).to_string()
            } else {
                format!("{:5}", record.level())
            };

            let target = format!("[{}]", record.target());
            if use_color {
                eprintln!("{} {} {}", level_str, target.dimmed(), record.args());
            } else {
                eprintln!("{} {} {}", level_str, target, record.args());
            }
        }
    }

    fn flush(&self) {}
}

pub struct ScopedTimer {
    name: String,
    start: std::time::Instant,
}

impl ScopedTimer {
    pub fn new(name: &str) -> Self {
        log::debug!("[TIMER] {} started", name);
        Self {
            name: name.to_string(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        log::debug!("[TIMER] {} took {:.2}ms", self.name, elapsed.as_secs_f64() * 1000.0);
    }
}

pub fn scoped_timer(name: &str) -> ScopedTimer {
    ScopedTimer::new(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_str() {
        assert_eq!(LoggingUtils::level_from_str("WARNING"), LevelFilter::Warn);
        assert_eq!(LoggingUtils::level_from_str("trace"), LevelFilter::Trace);
        assert_eq!(LoggingUtils::level_from_str("off"), LevelFilter::Off);
        assert_eq!(LoggingUtils::level_from_str("bogus"), LevelFilter::Warn);
    }

    #[test]
    fn test_level_from_verbosity() {
        assert_eq!(LoggingUtils::level_from_verbosity(0), LevelFilter::Warn);
        assert_eq!(LoggingUtils::level_from_verbosity(2), LevelFilter::Debug);
        assert_eq!(LoggingUtils::level_from_verbosity(9), LevelFilter::Trace);
    }

    #[test]
    fn test_logger_respects_level() {
        let logger = ColoredLogger::new(LevelFilter::Info, false);
        let debug = Metadata::builder().level(Level::Debug).build();
        let error = Metadata::builder().level(Level::Error).build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&error));
    }
}
