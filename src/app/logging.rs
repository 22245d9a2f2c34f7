//! logging stuff
use {
    crate::{config::options::LoggingFormat, error::Result, getopt},
    tracing::{Level, debug, subscriber},
    tracing_subscriber::FmtSubscriber,
};

/// setup logging from the `[logging]` config
pub fn setup() -> Result<()> {
    let level = getopt!(logging.level);

    if !getopt!(logging.enable) || level.eq_ignore_ascii_case("off") {
        return Ok(());
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(string_to_log_level(&level))
        .with_writer(std::io::stderr)
        .with_ansi(getopt!(logging.ansi))
        .with_line_number(getopt!(logging.line_numbers))
        .with_target(getopt!(logging.event_targets));

    let installed = match getopt!(logging.format) {
        LoggingFormat::Pretty => subscriber::set_global_default(subscriber.pretty().finish()),
        LoggingFormat::Compact => subscriber::set_global_default(subscriber.compact().finish()),
    };

    installed.map_err(|e| format!("failed to install log subscriber: {}", e))?;

    debug!("logging set up");
    Ok(())
}

/// turn a config string into a log level
pub fn string_to_log_level(lvl: &str) -> Level {
    match lvl.to_lowercase().as_str() {
        "d" | "debug" | "dbg" => Level::DEBUG,
        "t" | "trace" | "trc" => Level::TRACE,
        "e" | "error" | "err" => Level::ERROR,
        "i" | "info" | "inf" => Level::INFO,
        "w" | "warn" | "wrn" => Level::WARN,
        _ => Level::ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_levels() {
        assert_eq!(string_to_log_level("dbg"), Level::DEBUG);
        assert_eq!(string_to_log_level("WARN"), Level::WARN);
        assert_eq!(string_to_log_level("i"), Level::INFO);
        assert_eq!(string_to_log_level("loud"), Level::ERROR);
    }
}
