use crate::config::toml_config::TomlConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter for the `setcard` crate. `RUST_LOG` always wins.
fn build_filter(verbose: bool, default_level: &str) -> EnvFilter {
    if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("setcard=debug,{}", default_level)))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("setcard={}", default_level)))
    }
}

/// Logs go to stderr; stdout carries only program output.
pub fn init_cli_logger(verbose: bool, default_level: &str) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, default_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool, default_level: &str) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, default_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

/// Applies the `[logging]` section, falling back to `default_level`.
pub fn init_from_settings(verbose: bool, settings: &TomlConfig, default_level: &str) {
    let level = settings.log_level().unwrap_or(default_level);
    if settings.json_logs() {
        init_json_logger(verbose, level);
    } else {
        init_cli_logger(verbose, level);
    }
}
