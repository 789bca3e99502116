use log::{Level, LevelFilter, Log, Metadata, Record};

/// Logger writing every enabled record to stderr.
pub struct SimpleLogger;

impl Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Map a `-v` count onto a level, starting from warnings.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => Level::Warn.to_level_filter(),
        1 => Level::Info.to_level_filter(),
        2 => Level::Debug.to_level_filter(),
        _ => Level::Trace.to_level_filter(),
    }
}
