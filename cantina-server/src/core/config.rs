use chrono_tz::Tz;

use crate::core::ServerError;
use crate::orders::TransitionPolicy;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 5000 | HTTP listen port |
/// | DATABASE_PATH | pedidos.db | SQLite file |
/// | MENU_PATH | (unset) | JSON menu file, built-in menu when unset |
/// | BUSINESS_TIMEZONE | UTC | IANA zone for displayed times |
/// | STATUS_TRANSITIONS | any | `any` or `strict` |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | tracing filter when `RUST_LOG` is unset |
/// | LOG_JSON | false in development | JSON log lines |
/// | LOG_DIR | (unset) | daily-rotated log files |
/// | REQUEST_TIMEOUT_MS | 30000 | HTTP request timeout (ms) |
/// | WHATSAPP_NUMBER | (unset) | canteen number for the order confirmation link |
///
/// ```ignore
/// HTTP_PORT=8080 BUSINESS_TIMEZONE=America/Sao_Paulo cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub database_path: String,
    pub menu_path: Option<String>,
    pub business_timezone: Tz,
    pub status_transitions: TransitionPolicy,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    pub request_timeout_ms: u64,
    /// Digits only, e.g. `5511999999999`
    pub whatsapp_number: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 5000,
            database_path: "pedidos.db".into(),
            menu_path: None,
            business_timezone: Tz::UTC,
            status_transitions: TransitionPolicy::Unrestricted,
            environment: "development".into(),
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            request_timeout_ms: 30000,
            whatsapp_number: None,
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Numeric values that fail to parse fall back to their defaults; an
    /// unknown time zone or transition policy is an error.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let defaults = Self::default();
        let non_empty = |key: &str| get(key).filter(|v| !v.trim().is_empty());

        let environment = non_empty("ENVIRONMENT").unwrap_or(defaults.environment);
        let business_timezone = match non_empty("BUSINESS_TIMEZONE") {
            Some(name) => name
                .trim()
                .parse::<Tz>()
                .map_err(|e| ServerError::Config(format!("BUSINESS_TIMEZONE: {e}")))?,
            None => defaults.business_timezone,
        };
        let status_transitions = match non_empty("STATUS_TRANSITIONS") {
            Some(value) => value
                .parse::<TransitionPolicy>()
                .map_err(|e| ServerError::Config(format!("STATUS_TRANSITIONS: {e}")))?,
            None => defaults.status_transitions,
        };

        Ok(Self {
            http_port: get("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.http_port),
            database_path: non_empty("DATABASE_PATH").unwrap_or(defaults.database_path),
            menu_path: non_empty("MENU_PATH"),
            business_timezone,
            status_transitions,
            log_level: non_empty("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: get("LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(environment != "development"),
            log_dir: non_empty("LOG_DIR"),
            request_timeout_ms: get("REQUEST_TIMEOUT_MS")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.request_timeout_ms),
            whatsapp_number: get("WHATSAPP_NUMBER")
                .map(|v| v.chars().filter(char::is_ascii_digit).collect::<String>())
                .filter(|digits| !digits.is_empty()),
            environment,
        })
    }
}
