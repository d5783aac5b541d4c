use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::config::structs::configuration::Configuration;

/// Initializes the global fern logger from the configured log level.
///
/// Panics when called twice or when the configured level is unknown; both
/// indicate a broken deployment rather than a recoverable condition.
pub fn setup_logging(config: &Configuration)
{
    let level = parse_level(config.log_level.as_str());

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
        .is_err()
    {
        panic!("Failed to initialize logging.")
    }
    info!("[BOOT] Logging initialized at level {level}");
}

fn parse_level(value: &str) -> log::LevelFilter
{
    match value {
        "off" => log::LevelFilter::Off,
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => {
            panic!("Unknown log level encountered: '{value}'");
        }
    }
}
