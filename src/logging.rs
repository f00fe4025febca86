//! Logger setup for the binary.

use log::LevelFilter;
use std::io::Write;

/// Map `-v` occurrences to a level. Zero means "let RUST_LOG decide".
pub fn level_from_verbosity(verbose: u8) -> Option<LevelFilter> {
    match verbose {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

/// Install env_logger on stderr; stdout is reserved for command output.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::new();
    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{}: {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .parse_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }

    let _ = builder.try_init();
}
