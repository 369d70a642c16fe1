use std::str::FromStr;
use std::time::Duration;

use roster_db::DbConfig;

/// A malformed environment variable.
#[derive(Debug, thiserror::Error)]
#[error("{var} must be {expected}, got {value:?}")]
pub struct ConfigError {
    pub var: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(()),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub log_format: LogFormat,
    pub db: DbConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                   | Default                 |
    /// |---------------------------|-------------------------|
    /// | `HOST`                    | `0.0.0.0`               |
    /// | `PORT`                    | `8000`                  |
    /// | `DATABASE_URL`            | `sqlite://roster.db`    |
    /// | `DB_MAX_CONNECTIONS`      | `5`                     |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`                     |
    /// | `DB_ENFORCE_FOREIGN_KEYS` | `false`                 |
    /// | `CORS_ORIGINS`            | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                    |
    /// | `LOG_FORMAT`              | `pretty`                |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");
        let port = parse("PORT", &var("PORT", "8000"), "a valid port number")?;

        let cors_origins = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse(
            "REQUEST_TIMEOUT_SECS",
            &var("REQUEST_TIMEOUT_SECS", "30"),
            "a whole number of seconds",
        )?;

        let log_format = parse(
            "LOG_FORMAT",
            &var("LOG_FORMAT", "pretty"),
            "`pretty` or `json`",
        )?;

        let db = DbConfig {
            url: var("DATABASE_URL", "sqlite://roster.db"),
            max_connections: parse(
                "DB_MAX_CONNECTIONS",
                &var("DB_MAX_CONNECTIONS", "5"),
                "a positive integer",
            )?,
            acquire_timeout: Duration::from_secs(parse(
                "DB_ACQUIRE_TIMEOUT_SECS",
                &var("DB_ACQUIRE_TIMEOUT_SECS", "5"),
                "a whole number of seconds",
            )?),
            enforce_foreign_keys: parse_bool(
                "DB_ENFORCE_FOREIGN_KEYS",
                &var("DB_ENFORCE_FOREIGN_KEYS", "false"),
            )?,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            log_format,
            db,
        })
    }
}

fn parse<T: FromStr>(
    var: &'static str,
    value: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError {
        var,
        expected,
        value: value.to_string(),
    })
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError {
            var,
            expected: "a boolean",
            value: value.to_string(),
        }),
    }
}
