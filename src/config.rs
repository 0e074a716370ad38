//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,

    // === Observability ===
    /// Port for the Prometheus scrape listener. Disabled when unset.
    #[serde(default)]
    pub metrics_port: Option<u16>,

    // === Documentation ===
    /// Mount Swagger UI at `/swagger-ui`.
    #[serde(default)]
    pub swagger_ui: bool,
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            rust_log: default_log_level(),
            verbose: false,
            metrics_port: None,
            swagger_ui: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("PORT must be non-zero".to_string());
        }

        match self.metrics_port {
            Some(0) => return Err("METRICS_PORT must be non-zero".to_string()),
            Some(p) if p == self.port => {
                return Err("METRICS_PORT must differ from PORT".to_string());
            }
            _ => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_sensible() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.metrics_port.is_none());
        assert!(!config.swagger_ui);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_port() {
        let config = Config {
            port: 0,
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_metrics_port_collision() {
        let config = Config {
            metrics_port: Some(8080),
            ..Config::default()
        };

        assert!(config.validate().is_err());

        let config = Config {
            metrics_port: Some(9000),
            ..Config::default()
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn deserializes_from_env_pairs() {
        let vars = vec![
            ("PORT".to_string(), "3000".to_string()),
            ("METRICS_PORT".to_string(), "9100".to_string()),
            ("SWAGGER_UI".to_string(), "true".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.metrics_port, Some(9100));
        assert!(config.swagger_ui);
        assert_eq!(config.rust_log, "info");
    }
}
