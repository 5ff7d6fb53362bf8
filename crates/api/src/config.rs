use axum::http::HeaderValue;

use crate::auth::jwt::JwtConfig;

/// Startup configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Log output format selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Upper bound on pooled connections (default: `10`).
    pub db_max_connections: u32,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub log_format: LogFormat,
    /// Bearer token validation settings.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `DATABASE_URL`         | required                   |
    /// | `DB_MAX_CONNECTIONS`   | `10`                       |
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `JWT_SECRET`           | required, non-empty        |
    /// | `JWT_ISSUER`           | unset                      |
    /// | `JWT_AUDIENCE`         | unset                      |
    /// | `LOG_FORMAT`           | `pretty`                   |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = required(&lookup, "DATABASE_URL")?;
        let db_max_connections = parsed(&lookup, "DB_MAX_CONNECTIONS", 10)?;

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parsed(&lookup, "PORT", 3000)?;

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|e| ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    reason: format!("'{origin}': {e}"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs = parsed(&lookup, "REQUEST_TIMEOUT_SECS", 30)?;

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "LOG_FORMAT",
                    reason: format!("expected 'pretty' or 'json', got '{other}'"),
                })
            }
        };

        let jwt = JwtConfig {
            secret: required(&lookup, "JWT_SECRET")?,
            issuer: lookup("JWT_ISSUER").filter(|s| !s.is_empty()),
            audience: lookup("JWT_AUDIENCE").filter(|s| !s.is_empty()),
        };

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
            cors_origins,
            request_timeout_secs,
            log_format,
            jwt,
        })
    }
}

/// A variable that must be present and non-empty.
fn required<F>(lookup: &F, var: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(var)),
    }
}

/// A variable parsed with `FromStr`, falling back to `default` when unset.
fn parsed<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|var| map.get(var).cloned())
    }

    const MINIMAL: [(&str, &str); 2] = [
        ("DATABASE_URL", "postgres://localhost/folio"),
        ("JWT_SECRET", "s3cret"),
    ];

    #[test]
    fn defaults_apply() {
        let config = load(&MINIMAL).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.db_max_connections, 10);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.cors_origins, vec![HeaderValue::from_static("http://localhost:5173")]);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.jwt.issuer.is_none());
        assert!(config.jwt.audience.is_none());
    }

    #[test]
    fn missing_required_vars() {
        assert_matches!(
            load(&[("JWT_SECRET", "s3cret")]),
            Err(ConfigError::Missing("DATABASE_URL"))
        );
        assert_matches!(
            load(&[("DATABASE_URL", "postgres://x"), ("JWT_SECRET", "  ")]),
            Err(ConfigError::Missing("JWT_SECRET"))
        );
    }

    #[test]
    fn invalid_port_is_reported() {
        let mut vars = MINIMAL.to_vec();
        vars.push(("PORT", "eighty"));
        assert_matches!(load(&vars), Err(ConfigError::Invalid { var: "PORT", .. }));
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let mut vars = MINIMAL.to_vec();
        vars.push(("CORS_ORIGINS", "https://a.dev, https://b.dev,,"));
        let config = load(&vars).unwrap();
        assert_eq!(
            config.cors_origins,
            vec![
                HeaderValue::from_static("https://a.dev"),
                HeaderValue::from_static("https://b.dev"),
            ]
        );
    }

    #[test]
    fn log_format_and_jwt_overrides() {
        let mut vars = MINIMAL.to_vec();
        vars.extend([
            ("LOG_FORMAT", "json"),
            ("JWT_ISSUER", "https://id.example.com"),
            ("JWT_AUDIENCE", ""),
        ]);
        let config = load(&vars).unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.jwt.issuer.as_deref(), Some("https://id.example.com"));
        assert!(config.jwt.audience.is_none());

        let mut bad = MINIMAL.to_vec();
        bad.push(("LOG_FORMAT", "xml"));
        assert_matches!(load(&bad), Err(ConfigError::Invalid { var: "LOG_FORMAT", .. }));
    }
}
