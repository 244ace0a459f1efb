//! Server configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads `.env` through `dotenvy`, then builds one `ServerConfig` that
//! is shared (behind an `Arc`) by every handler through `AppState`.

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_PUBLIC_URL: &str = "/";
const DEFAULT_CODE_REQUEST_LIMIT: usize = 5;
const DEFAULT_CODE_REQUEST_WINDOW_SECS: u64 = 600;
const DEFAULT_CODE_REQUEST_GLOBAL_LIMIT: usize = 100;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Outbound email settings. Absent when `RESEND_API_KEY` is not set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResendConfig {
    pub api_key: String,
    pub from: String,
}

/// Limits applied to `POST /api/auth/email/request-code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeRequestLimits {
    pub per_email: usize,
    pub global: usize,
    pub window_secs: u64,
}

impl Default for CodeRequestLimits {
    fn default() -> Self {
        Self {
            per_email: DEFAULT_CODE_REQUEST_LIMIT,
            global: DEFAULT_CODE_REQUEST_GLOBAL_LIMIT,
            window_secs: DEFAULT_CODE_REQUEST_WINDOW_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub cookie_secure: bool,
    pub public_url: String,
    pub resend: Option<ResendConfig>,
    /// Dev-only: return access codes in the request-code response.
    pub echo_access_codes: bool,
    pub code_limits: CodeRequestLimits,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `DATABASE_URL`
    ///
    /// Optional:
    /// - `PORT` (default 3000), `DB_MAX_CONNECTIONS` (default 5)
    /// - `COOKIE_SECURE`, `ECHO_ACCESS_CODES` (booleans, default false)
    /// - `PUBLIC_URL` (default `/`; must be an absolute http(s) URL when
    ///   `RESEND_API_KEY` is set, since emails link back to it)
    /// - `RESEND_API_KEY` + `RESEND_FROM`
    /// - `CODE_REQUEST_LIMIT`, `CODE_REQUEST_GLOBAL_LIMIT`, `CODE_REQUEST_WINDOW_SECS`
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing, a numeric value does not
    /// parse, or emails are enabled with a relative `PUBLIC_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Used by `from_env` and tests.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let resend = match (lookup("RESEND_API_KEY"), lookup("RESEND_FROM")) {
            (Some(api_key), Some(from)) if !api_key.trim().is_empty() => Some(ResendConfig { api_key, from }),
            (Some(api_key), None) if !api_key.trim().is_empty() => {
                Some(ResendConfig { api_key, from: "MonMatos <noreply@monmatos.fr>".to_owned() })
            }
            _ => None,
        };

        let public_url = lookup("PUBLIC_URL").unwrap_or_else(|| DEFAULT_PUBLIC_URL.to_owned());
        if resend.is_some() && !is_absolute_url(&public_url) {
            return Err(ConfigError::Invalid { key: "PUBLIC_URL", value: public_url });
        }

        Ok(Self {
            database_url,
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
            cookie_secure: bool_or(&lookup, "COOKIE_SECURE", false)?,
            public_url,
            resend,
            echo_access_codes: bool_or(&lookup, "ECHO_ACCESS_CODES", false)?,
            code_limits: CodeRequestLimits {
                per_email: parse_or(&lookup, "CODE_REQUEST_LIMIT", DEFAULT_CODE_REQUEST_LIMIT)?,
                global: parse_or(&lookup, "CODE_REQUEST_GLOBAL_LIMIT", DEFAULT_CODE_REQUEST_GLOBAL_LIMIT)?,
                window_secs: parse_or(&lookup, "CODE_REQUEST_WINDOW_SECS", DEFAULT_CODE_REQUEST_WINDOW_SECS)?,
            },
        })
    }
}

fn is_absolute_url(url: &str) -> bool {
    ["https://", "http://"]
        .iter()
        .any(|scheme| url.strip_prefix(scheme).is_some_and(|host| !host.trim_matches('/').is_empty()))
}

/// Parse common boolean spellings (`1/true/yes/on`, `0/false/no/off`).
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn bool_or<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { key, value: raw }),
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
