use tracing_subscriber::EnvFilter;
use yomi_config::log::LogConfig;

/// Filter directive from config, raised by `-v` flags
pub fn filter_directive(config: &LogConfig, verbose: u8) -> String {
    match verbose {
        0 => config.filter.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber. `RUST_LOG` wins over config.
/// Logs go to stderr, stdout carries command output.
pub fn init(config: &LogConfig, verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config, verbose)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
