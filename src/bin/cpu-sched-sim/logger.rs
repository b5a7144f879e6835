use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record};
use term::color::{self, Color};
use term::Terminal as _;

/// Writes log records to stderr as a colored, right-aligned tag followed by
/// the message.
pub struct Terminal;

static LOGGER: Terminal = Terminal;

impl Terminal {
    pub fn install(level: LevelFilter) {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
    }
}

impl Log for Terminal {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let target = record.target().rsplit("::").next().unwrap_or("");
        let tag = if record.level() <= Level::Warn {
            record.level().as_str()
        } else {
            target
        };
        match term::stderr() {
            Some(mut output) => {
                let _ = output.fg(tag_color(record.level()));
                let _ = write!(output, "{tag:>12}");
                let _ = output.reset();
                let _ = writeln!(output, " {}", record.args());
            }
            None => {
                let _ = writeln!(std::io::stderr(), "{tag:>12} {}", record.args());
            }
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn tag_color(level: Level) -> Color {
    match level {
        Level::Error => color::RED,
        Level::Warn => color::YELLOW,
        _ => color::GREEN,
    }
}
