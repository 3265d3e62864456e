use dioxus::logger::tracing::Level;
use shared_types::{AppConfig, LogLevel};
use std::path::Path;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable that overrides `[logging] level`.
pub const LOG_LEVEL_ENV: &str = "APP_LOG_LEVEL";

/// Read `config.toml` once and keep it for the process lifetime.
/// Only the first call reads the file.
pub fn load_app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| read_config(Path::new(CONFIG_PATH)))
}

/// Parse the config file at `path`. A missing or unparseable file yields
/// the defaults. The logger is not up yet, so notices go to stderr.
fn read_config(path: &Path) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            eprintln!("[config] Failed to parse {}: {e} — using defaults", path.display());
            AppConfig::default()
        }),
        Err(e) => {
            eprintln!("[config] {} not found ({e}) — using defaults", path.display());
            AppConfig::default()
        }
    }
}

/// Resolve the log level: a recognised `env_override` wins over the file.
pub fn effective_level(config: &AppConfig, env_override: Option<&str>) -> LogLevel {
    match env_override {
        Some(raw) => LogLevel::from_name(raw).unwrap_or_else(|| {
            eprintln!("[config] Ignoring unknown {LOG_LEVEL_ENV}={raw:?}");
            config.logging.level
        }),
        None => config.logging.level,
    }
}

pub fn tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}
