//! Runtime configuration, read once at startup.

use smart_notes_core::{defaults, Error, Result};
use smart_notes_inference::GeminiConfig;

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "smart_notes_api=debug,tower_http=debug";

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `true` for JSON lines, `false` for human-readable text.
    pub json: bool,
    /// Daily-rolled log file instead of stdout.
    pub file: Option<String>,
    /// ANSI color override; auto-detected when `None`.
    pub ansi: Option<bool>,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub gemini: GeminiConfig,
    pub host: String,
    pub port: u16,
    pub log: LogConfig,
}

impl Config {
    /// Load from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variable names.
    ///
    /// `DATABASE_URL` and `GEMINI_API_KEY` are required; everything else has a
    /// default. Unparseable numbers are rejected rather than defaulted.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required =
            |key: &str| get(key).ok_or_else(|| Error::Config(format!("{} must be set", key)));

        let gemini = GeminiConfig {
            base_url: get("GEMINI_BASE_URL").unwrap_or_else(|| defaults::GEMINI_URL.to_string()),
            api_key: required("GEMINI_API_KEY")?,
            model: get("GEMINI_MODEL").unwrap_or_else(|| defaults::GEN_MODEL.to_string()),
            timeout_seconds: parse_or(
                "GEMINI_TIMEOUT",
                get("GEMINI_TIMEOUT"),
                defaults::GEN_TIMEOUT_SECS,
            )?,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            db_max_connections: parse_or(
                "DB_MAX_CONNECTIONS",
                get("DB_MAX_CONNECTIONS"),
                defaults::DB_MAX_CONNECTIONS,
            )?,
            gemini,
            host: get("HOST").unwrap_or_else(|| defaults::SERVER_HOST.to_string()),
            port: parse_or("PORT", get("PORT"), defaults::SERVER_PORT)?,
            log: LogConfig {
                json: get("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json")),
                file: get("LOG_FILE"),
                ansi: get("LOG_ANSI").map(|v| v == "true" || v == "1"),
            },
        })
    }

    /// `host:port` to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, raw: Option<String>, default: T) -> Result<T> {
    match raw {
        None => Ok(default),
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| Error::Config(format!("{} has invalid value '{}'", key, v))),
    }
}
