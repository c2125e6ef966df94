use colored::{ColoredString, Colorize};
use env_logger::Builder;
use log::{Level, LevelFilter, Record};
use std::io::Write;

/// Level for records from this crate; dependencies stay at `Warn`.
fn crate_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn level_tag(level: Level) -> Option<ColoredString> {
    match level {
        Level::Warn => Some("WARN".yellow()),
        Level::Error => Some("ERROR".red()),
        _ => None,
    }
}

/// `[cleancode WARN target] msg` for problems, `[cleancode] msg` otherwise.
fn format_record(record: &Record) -> String {
    let name = env!("CARGO_PKG_NAME").cyan();
    match level_tag(record.level()) {
        Some(tag) => format!(
            "[{} {} {}] {}",
            name,
            tag,
            record.target().white(),
            record.args()
        ),
        None => format!("[{}] {}", name, record.args()),
    }
}

/// Install the stderr logger. `RUST_LOG` directives for other modules apply; the default level
/// and this crate's level are always set here.
pub fn setup_logging(verbose: bool) {
    // try_init: tests drive the CLI path more than once per process.
    let _ = Builder::from_default_env()
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_PKG_NAME"), crate_level(verbose))
        .format(|buf, record| writeln!(buf, "{}", format_record(record)))
        .try_init();
}
