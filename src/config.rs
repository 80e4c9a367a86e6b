use crate::logger::{Level, Logger};
use std::env;

/// Configuration for the chain-address CLI tool
#[derive(Debug, Clone)]
pub struct Config {
    /// Output format: "human" (default) or "json"
    pub output_format: String,

    /// Log level: "info", "debug", "warn", "error" (default: "info")
    pub log_level: String,
}

impl Config {
    /// Create a new config with defaults
    pub fn new() -> Self {
        Config {
            output_format: "human".to_string(),
            log_level: "info".to_string(),
        }
    }

    /// Get output format
    pub fn get_output_format(&self) -> &str {
        &self.output_format
    }

    /// Set output format ("human" or "json")
    pub fn set_output_format(&mut self, format: String) {
        self.output_format = format;
    }

    /// Get log level
    pub fn get_log_level(&self) -> &str {
        &self.log_level
    }

    /// Set log level
    pub fn set_log_level(&mut self, level: String) {
        self.log_level = level;
    }

    pub fn is_json(&self) -> bool {
        self.output_format == "json"
    }

    /// Logger gated at the configured level
    pub fn logger(&self) -> Logger {
        Logger::new(Level::parse(&self.log_level))
    }

    /// Load config from environment variables
    ///
    /// Environment variables:
    /// - `CHAIN_ADDRESS_OUTPUT_FORMAT`: "human" or "json"
    /// - `CHAIN_ADDRESS_LOG_LEVEL`: log level
    pub fn from_env() -> Self {
        Config::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = Config::new();

        if let Some(format) = lookup("CHAIN_ADDRESS_OUTPUT_FORMAT") {
            config.output_format = format;
        }

        if let Some(level) = lookup("CHAIN_ADDRESS_LOG_LEVEL") {
            config.log_level = level;
        }

        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
