use crate::services::{CompanyConfig, RulesConfig};
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub company: CompanyConfig,
    pub rules: RulesConfig,
    pub reservation_service_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://staffdesk.db?mode=rwc".to_string());

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let company = CompanyConfig {
            base_url: env::var("COMPANY_SERVICE_URL").unwrap_or_default(),
            enabled: env_flag("COMPANY_VALIDATION_ENABLED", false),
            strict: env_flag("COMPANY_VALIDATION_STRICT", false),
            connect_timeout: env_seconds("COMPANY_HTTP_CONNECT_TIMEOUT", 2.0),
            read_timeout: env_seconds("COMPANY_HTTP_READ_TIMEOUT", 2.0),
        };

        let rules = RulesConfig {
            enabled: env_flag("RULES_CHECK_ENABLED", false),
            base_url: env::var("RULES_CHECK_BASE_URL").unwrap_or_default(),
            connect_timeout: env_seconds("RULES_CONNECT_TIMEOUT", 2.0),
            read_timeout: env_seconds("RULES_READ_TIMEOUT", 2.0),
            audit_enabled: env_flag("RULES_AUDIT_ENABLED", false),
            audit_service: env::var("RULES_AUDIT_SERVICE")
                .unwrap_or_else(|_| "employee-service".to_string()),
        };

        if rules.enabled && rules.base_url.is_empty() {
            return Err(ConfigError::MissingRulesBaseUrl);
        }

        let reservation_service_url = env::var("RESERVATION_SERVICE_URL").ok();

        Ok(Config {
            database_url,
            server_host,
            server_port,
            company,
            rules,
            reservation_service_url,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(value) => matches!(
            value.to_lowercase().as_str(),
            "1" | "true" | "yes" | "y" | "on"
        ),
        Err(_) => default,
    }
}

// Timeouts feed Duration::from_secs_f64, which panics on negative or
// non-finite input, so such values fall back to the default.
fn env_seconds(name: &str, default: f64) -> f64 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|secs| secs.is_finite() && *secs >= 0.0)
        .unwrap_or(default)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("RULES_CHECK_BASE_URL must be set when RULES_CHECK_ENABLED is on")]
    MissingRulesBaseUrl,
}
